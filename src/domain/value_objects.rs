//! Domain value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The closed set of model names the service knows about.
///
/// Serde's lowercase renaming makes the path extractor reject anything
/// outside this set before a handler runs. The enumeration is closed:
/// adding a variant here is the only way to extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    /// Get all supported model names
    pub fn all() -> Vec<ModelName> {
        vec![ModelName::Alexnet, ModelName::Resnet, ModelName::Lenet]
    }

    /// Get the canonical wire name for this model
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "alexnet",
            ModelName::Resnet => "resnet",
            ModelName::Lenet => "lenet",
        }
    }

    /// The message reported for this model.
    ///
    /// Alexnet and lenet are matched explicitly; every other variant falls
    /// through to the default message.
    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            _ => "Have some residuals",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// One entry of the in-memory catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub item_name: &'static str,
}

/// The fixed, read-only item catalog. Constructed once, never mutated.
pub const FAKE_ITEMS_DB: [CatalogEntry; 3] = [
    CatalogEntry { item_name: "Foo" },
    CatalogEntry { item_name: "Bar" },
    CatalogEntry { item_name: "Baz" },
];
