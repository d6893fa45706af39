//! Endpoint descriptors shown under each list page so store owners can call
//! the public API directly.

use serde::{Deserialize, Serialize};

use super::collection::EntityCollection;
use super::paths::ResourcePaths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointVariant {
    /// Readable without authentication
    Public,
    /// Requires a store owner session
    Admin,
}

impl EndpointVariant {
    pub const fn label(self) -> &'static str {
        match self {
            EndpointVariant::Public => "Público",
            EndpointVariant::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub method: &'static str,
    pub variant: EndpointVariant,
    pub url: String,
}

/// Build the five endpoints of a collection: list, fetch, create, update, delete.
///
/// `origin` is the scheme+host of the API (without trailing slash).
pub fn api_reference(origin: &str, store_id: &str, collection: EntityCollection) -> Vec<ApiEndpoint> {
    let paths = ResourcePaths::new(store_id, collection);
    let base = format!("{}{}", origin.trim_end_matches('/'), paths.collection());
    let item = format!("{}/{{{}}}", base, collection.id_param());

    vec![
        ApiEndpoint {
            method: "GET",
            variant: EndpointVariant::Public,
            url: base.clone(),
        },
        ApiEndpoint {
            method: "GET",
            variant: EndpointVariant::Public,
            url: item.clone(),
        },
        ApiEndpoint {
            method: "POST",
            variant: EndpointVariant::Admin,
            url: base,
        },
        ApiEndpoint {
            method: "PATCH",
            variant: EndpointVariant::Admin,
            url: item.clone(),
        },
        ApiEndpoint {
            method: "DELETE",
            variant: EndpointVariant::Admin,
            url: item,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_reference_for_colors() {
        let endpoints = api_reference("http://localhost:3000/", "s1", EntityCollection::Colors);
        assert_eq!(endpoints.len(), 5);
        assert_eq!(endpoints[0].url, "http://localhost:3000/api/s1/colors");
        assert_eq!(endpoints[1].url, "http://localhost:3000/api/s1/colors/{colorId}");
        assert_eq!(endpoints[4].method, "DELETE");
        assert_eq!(endpoints[4].variant, EndpointVariant::Admin);
    }

    #[test]
    fn test_only_reads_are_public() {
        let endpoints = api_reference("", "s1", EntityCollection::Sizes);
        let public: Vec<_> = endpoints
            .iter()
            .filter(|e| e.variant == EndpointVariant::Public)
            .map(|e| e.method)
            .collect();
        assert_eq!(public, vec!["GET", "GET"]);
    }
}
