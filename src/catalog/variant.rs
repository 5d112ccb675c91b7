// Catalog variant selection
// Picks seed data, default port, and home payload for one process

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

use super::{Catalog, Collection, HomeInfo};
use crate::store::{seed, RecordStore};

/// Which record collection this process serves
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CatalogVariant {
    Items,
    Products,
    #[default]
    Users,
}

impl CatalogVariant {
    /// Port used when `server.port` is not configured
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Products => 3000,
            Self::Items | Self::Users => 8080,
        }
    }

    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Items => "/items",
            Self::Products => "/products",
            Self::Users => "/users",
        }
    }

    /// Only the user catalog exposes get-by-id
    pub const fn supports_lookup(self) -> bool {
        matches!(self, Self::Users)
    }

    pub fn home(self) -> HomeInfo {
        match self {
            Self::Items => HomeInfo {
                message: "Welcome to the catalog - Items".to_string(),
                description: Some("Serves a fixed in-memory list of items".to_string()),
                version: None,
                endpoints: "/items".to_string(),
            },
            Self::Products => HomeInfo {
                message: "Welcome to the home page! This is a simple HTTP server.".to_string(),
                description: Some("Serves a fixed in-memory list of products".to_string()),
                version: None,
                endpoints: "/products".to_string(),
            },
            Self::Users => HomeInfo {
                message: "Welcome to the User Management API".to_string(),
                description: None,
                version: Some("1.0.0".to_string()),
                endpoints: "/users, /users/{id}".to_string(),
            },
        }
    }

    /// Build the seeded catalog for this variant
    pub fn build(self) -> Arc<dyn Collection> {
        match self {
            Self::Items => Arc::new(Catalog::new(self, "item", RecordStore::new(seed::items()))),
            Self::Products => Arc::new(Catalog::new(
                self,
                "product",
                RecordStore::new(seed::products()),
            )),
            Self::Users => Arc::new(Catalog::new(self, "user", RecordStore::new(seed::users()))),
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Items => "items",
            Self::Products => "products",
            Self::Users => "users",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(CatalogVariant::Items.default_port(), 8080);
        assert_eq!(CatalogVariant::Products.default_port(), 3000);
        assert_eq!(CatalogVariant::Users.default_port(), 8080);
    }

    #[test]
    fn test_build_sizes_and_lookup() {
        let users = CatalogVariant::Users.build();
        assert_eq!(users.len(), 2);
        assert!(users.supports_lookup());
        assert_eq!(users.collection_path(), "/users");

        let products = CatalogVariant::Products.build();
        assert_eq!(products.len(), 1);
        assert!(!products.supports_lookup());

        let items = CatalogVariant::Items.build();
        assert_eq!(items.len(), 2);
        assert_eq!(items.noun(), "item");
    }

    #[test]
    fn test_variant_deserialize() {
        let v: CatalogVariant = serde_json::from_str(r#""products""#).unwrap();
        assert_eq!(v, CatalogVariant::Products);
        assert!(serde_json::from_str::<CatalogVariant>(r#""orders""#).is_err());
    }
}
