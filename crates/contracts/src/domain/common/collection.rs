use serde::{Deserialize, Serialize};

/// REST collection of a catalog entity.
///
/// The segment is shared by the backend API (`/api/{store}/{segment}`) and the
/// admin routes (`/{store}/{segment}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCollection {
    Billboards,
    Categories,
    Sizes,
    Colors,
    Products,
    Orders,
}

impl EntityCollection {
    pub const ALL: [EntityCollection; 6] = [
        EntityCollection::Billboards,
        EntityCollection::Categories,
        EntityCollection::Sizes,
        EntityCollection::Colors,
        EntityCollection::Products,
        EntityCollection::Orders,
    ];

    /// Path segment used in API and view URLs
    pub const fn segment(self) -> &'static str {
        match self {
            EntityCollection::Billboards => "billboards",
            EntityCollection::Categories => "categories",
            EntityCollection::Sizes => "sizes",
            EntityCollection::Colors => "colors",
            EntityCollection::Products => "products",
            EntityCollection::Orders => "orders",
        }
    }

    /// Name of the id placeholder shown in the API reference
    pub const fn id_param(self) -> &'static str {
        match self {
            EntityCollection::Billboards => "billboardId",
            EntityCollection::Categories => "categoryId",
            EntityCollection::Sizes => "sizeId",
            EntityCollection::Colors => "colorId",
            EntityCollection::Products => "productId",
            EntityCollection::Orders => "orderId",
        }
    }

    /// Plural heading of the list page
    pub const fn plural_title(self) -> &'static str {
        match self {
            EntityCollection::Billboards => "Destaques",
            EntityCollection::Categories => "Categorias",
            EntityCollection::Sizes => "Tamanhos",
            EntityCollection::Colors => "Cores",
            EntityCollection::Products => "Produtos",
            EntityCollection::Orders => "Pedidos",
        }
    }

    pub const fn list_description(self) -> &'static str {
        match self {
            EntityCollection::Billboards => "Gerenciar os destaques da sua loja",
            EntityCollection::Categories => "Gerenciar as categorias da sua loja",
            EntityCollection::Sizes => "Gerenciar os tamanhos da sua loja",
            EntityCollection::Colors => "Gerenciar as cores da sua loja",
            EntityCollection::Products => "Gerenciar os produtos da sua loja",
            EntityCollection::Orders => "Gerenciar os pedidos da sua loja",
        }
    }

    /// Label of the list page "add" button
    pub const fn add_label(self) -> &'static str {
        match self {
            EntityCollection::Billboards => "Adicionar Destaque",
            EntityCollection::Categories => "Adicionar Categoria",
            EntityCollection::Sizes => "Adicionar Tamanho",
            EntityCollection::Colors => "Adicionar Cor",
            EntityCollection::Products => "Adicionar Produto",
            EntityCollection::Orders => "Adicionar Pedido",
        }
    }

    pub const fn api_description(self) -> &'static str {
        match self {
            EntityCollection::Billboards => "Chamadas de API para os destaques",
            EntityCollection::Categories => "Chamadas de API para as categorias",
            EntityCollection::Sizes => "Chamadas de API para os tamanhos",
            EntityCollection::Colors => "Chamadas de API para as cores",
            EntityCollection::Products => "Chamadas de API para os produtos",
            EntityCollection::Orders => "Chamadas de API para os pedidos",
        }
    }

    /// Parse a path segment back into a collection
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.segment() == segment)
    }
}

impl std::fmt::Display for EntityCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_roundtrip() {
        for collection in EntityCollection::ALL {
            assert_eq!(
                EntityCollection::from_segment(collection.segment()),
                Some(collection)
            );
        }
        assert_eq!(EntityCollection::from_segment("stores"), None);
    }

    #[test]
    fn test_serde_uses_segment() {
        let json = serde_json::to_string(&EntityCollection::Categories).unwrap();
        assert_eq!(json, "\"categories\"");
    }
}
