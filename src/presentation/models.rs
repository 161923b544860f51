//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{DomainError, ModelName};

/// Maximum accepted length of an item description, in characters.
const MAX_DESCRIPTION_CHARS: usize = 300;

/// An item as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Item display name
    #[schema(example = "Foo")]
    pub name: String,

    /// Optional free-text description, at most 300 characters
    #[schema(example = "A very nice Item", max_length = 300)]
    pub description: Option<String>,

    /// Net price of the item
    #[schema(example = 35.4)]
    pub price: f64,

    /// Optional tax amount added on top of the price
    #[schema(example = 3.2)]
    pub tax: Option<f64>,
}

impl Item {
    /// Validate constraints the body extractor cannot express.
    ///
    /// The length bound counts characters, not bytes, so multi-byte text
    /// is not penalized.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(description) = &self.description {
            let chars = description.chars().count();
            if chars > MAX_DESCRIPTION_CHARS {
                return Err(DomainError::InvalidInput {
                    field: "description".to_string(),
                    message: format!(
                        "Description must be at most {} characters, got {}",
                        MAX_DESCRIPTION_CHARS, chars
                    ),
                });
            }
        }
        Ok(())
    }
}

/// An image reference.
///
/// Declared as part of the public schema but not yet referenced by any
/// route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Image {
    /// Where the image can be fetched from
    #[schema(example = "https://example.com/foo.png")]
    pub url: String,

    /// Human-readable image name
    #[schema(example = "The Foo live feed")]
    pub name: String,
}

/// Response for item creation: the submitted fields, plus the derived
/// gross price iff a tax was given. Absent optionals serialize as null;
/// `price_with_tax` is omitted entirely when there is no tax.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateItemResponse {
    #[serde(flatten)]
    pub item: Item,

    /// Derived field: price + tax. Present only when tax was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 38.6)]
    pub price_with_tax: Option<f64>,
}

/// Response for item updates: the path id merged with the submitted fields
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateItemResponse {
    /// The item id taken from the request path
    #[schema(example = 5)]
    pub item_id: i64,

    #[serde(flatten)]
    pub item: Item,
}

/// Response for single-item reads
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadItemResponse {
    /// The item id taken from the request path
    #[schema(example = "abc")]
    pub item_id: String,

    /// Echo of the `q` query parameter; omitted when absent or empty
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "hi")]
    pub q: Option<String>,
}

/// One row of the catalog listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemSummary {
    /// Name of the catalog entry
    #[schema(example = "Foo")]
    pub item_name: String,
}

/// Response for model lookups
#[derive(Debug, Serialize, ToSchema)]
pub struct ModelResponse {
    /// The requested model name
    pub model_name: ModelName,

    /// The message associated with this model
    #[schema(example = "Have some residuals")]
    pub message: String,
}

/// Response for file-path echoes
#[derive(Debug, Serialize, ToSchema)]
pub struct FilePathResponse {
    /// The captured path remainder, embedded separators preserved
    #[schema(example = "home/johndoe/myfile.txt")]
    pub file_path: String,
}

/// Query parameters for single-item reads
#[derive(Debug, Deserialize, IntoParams)]
pub struct ReadItemQuery {
    /// Optional free-form query string echoed back when non-empty
    pub q: Option<String>,
}

/// Query parameters for catalog listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Number of leading entries to skip (default 0)
    pub skip: Option<usize>,
    /// Maximum number of entries to return (default 10)
    pub limit: Option<usize>,
}

impl ListItemsQuery {
    /// Normalize pagination parameters to their documented defaults
    pub fn window(&self) -> (usize, usize) {
        (self.skip.unwrap_or(0), self.limit.unwrap_or(10))
    }
}

/// Error response model
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Invalid input for field description")]
    pub message: String,

    /// Additional error context naming the offending field(s)
    #[schema(example = r#"{"field": "description"}"#)]
    pub details: Option<serde_json::Value>,

    /// Unique request identifier for tracking and support
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub request_id: Uuid,

    /// Error occurrence timestamp
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: Option<String>) -> Item {
        Item {
            name: "Foo".to_string(),
            description,
            price: 10.0,
            tax: None,
        }
    }

    #[test]
    fn description_at_the_bound_is_accepted() {
        assert!(item(Some("x".repeat(300))).validate().is_ok());
    }

    #[test]
    fn description_over_the_bound_is_rejected() {
        let err = item(Some("x".repeat(301))).validate().unwrap_err();
        match err {
            DomainError::InvalidInput { field, .. } => assert_eq!(field, "description"),
        }
    }

    #[test]
    fn missing_description_is_accepted() {
        assert!(item(None).validate().is_ok());
    }

    #[test]
    fn listing_window_defaults() {
        let query = ListItemsQuery {
            skip: None,
            limit: None,
        };
        assert_eq!(query.window(), (0, 10));

        let query = ListItemsQuery {
            skip: Some(1),
            limit: Some(1),
        };
        assert_eq!(query.window(), (1, 1));
    }

    #[test]
    fn absent_optionals_serialize_as_null_but_derived_field_is_omitted() {
        let response = CreateItemResponse {
            item: item(None),
            price_with_tax: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("description").unwrap().is_null());
        assert!(value.get("tax").unwrap().is_null());
        assert!(value.get("price_with_tax").is_none());
    }
}
