//! Path builders for the store-scoped REST API and admin views.

use super::collection::EntityCollection;

/// Paths of one collection inside one store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePaths<'a> {
    pub store_id: &'a str,
    pub collection: EntityCollection,
}

impl<'a> ResourcePaths<'a> {
    pub fn new(store_id: &'a str, collection: EntityCollection) -> Self {
        Self {
            store_id,
            collection,
        }
    }

    /// `/api/{store}/{collection}` - target of list and create requests
    pub fn collection(&self) -> String {
        format!(
            "/api/{}/{}",
            urlencoding::encode(self.store_id),
            self.collection.segment()
        )
    }

    /// `/api/{store}/{collection}/{id}` - target of fetch, update and delete requests
    pub fn entity(&self, id: &str) -> String {
        format!("{}/{}", self.collection(), urlencoding::encode(id))
    }

    /// `/{store}/{collection}`
    pub fn list_view(&self) -> String {
        format!("/{}/{}", self.store_id, self.collection.segment())
    }

    /// `/{store}/{collection}/{id}`
    pub fn edit_view(&self, id: &str) -> String {
        format!("{}/{}", self.list_view(), id)
    }

    /// `/{store}/{collection}/new`
    pub fn new_view(&self) -> String {
        self.edit_view(NEW_ENTITY_SEGMENT)
    }
}

/// Route segment that opens a detail form in create mode
pub const NEW_ENTITY_SEGMENT: &str = "new";

/// A store id typed by the user must fit in one path segment
pub fn is_valid_store_id(store_id: &str) -> bool {
    !store_id.is_empty()
        && !store_id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%' | '\\'))
}

/// Extract the store id (first path segment) from an admin view path
pub fn store_id_from_path(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths() {
        let paths = ResourcePaths::new("s1", EntityCollection::Billboards);
        assert_eq!(paths.collection(), "/api/s1/billboards");
        assert_eq!(paths.entity("b1"), "/api/s1/billboards/b1");
    }

    #[test]
    fn test_api_paths_escape_segments() {
        let paths = ResourcePaths::new("loja?x=1", EntityCollection::Sizes);
        assert_eq!(paths.collection(), "/api/loja%3Fx%3D1/sizes");
        assert_eq!(paths.entity("a/b"), "/api/loja%3Fx%3D1/sizes/a%2Fb");
    }

    #[test]
    fn test_store_id_validation() {
        assert!(is_valid_store_id("s1"));
        assert!(is_valid_store_id("6f1c-loja_2"));
        assert!(!is_valid_store_id(""));
        assert!(!is_valid_store_id("a/b"));
        assert!(!is_valid_store_id("loja?x=1"));
        assert!(!is_valid_store_id("minha loja"));
    }

    #[test]
    fn test_view_paths() {
        let paths = ResourcePaths::new("s1", EntityCollection::Products);
        assert_eq!(paths.list_view(), "/s1/products");
        assert_eq!(paths.edit_view("p9"), "/s1/products/p9");
        assert_eq!(paths.new_view(), "/s1/products/new");
    }

    #[test]
    fn test_store_id_from_path() {
        assert_eq!(store_id_from_path("/s1/billboards/b1"), Some("s1"));
        assert_eq!(store_id_from_path("/s1"), Some("s1"));
        assert_eq!(store_id_from_path("/"), None);
        assert_eq!(store_id_from_path(""), None);
    }
}
