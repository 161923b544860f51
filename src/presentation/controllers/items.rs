//! Items controller for the catalog endpoints

use axum::{
    extract::{Path, Query},
    response::Json,
};

use crate::domain::{DomainError, FAKE_ITEMS_DB};
use crate::presentation::models::{
    CreateItemResponse, ErrorResponse, Item, ItemSummary, ListItemsQuery, ReadItemQuery,
    ReadItemResponse, UpdateItemResponse,
};

/// Create an item.
///
/// Echoes the submitted fields back and derives `price_with_tax` only in
/// the branch where a tax is present; there is no sentinel zero-tax value.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = Item,
    responses(
        (status = 200, description = "The submitted item, with the derived gross price when a tax was given", body = CreateItemResponse),
        (status = 422, description = "Body failed validation", body = ErrorResponse)
    )
)]
pub async fn create_item(
    Json(item): Json<Item>,
) -> Result<Json<CreateItemResponse>, DomainError> {
    item.validate()?;

    let price_with_tax = item.tax.map(|tax| item.price + tax);
    Ok(Json(CreateItemResponse {
        item,
        price_with_tax,
    }))
}

/// Update an item by numeric id.
///
/// Nothing is stored; the response merges the path id with the submitted
/// fields.
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = i64, Path, description = "Numeric item id")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "The path id merged with the submitted item", body = UpdateItemResponse),
        (status = 422, description = "Body failed validation", body = ErrorResponse)
    )
)]
pub async fn update_item(
    Path(item_id): Path<i64>,
    Json(item): Json<Item>,
) -> Result<Json<UpdateItemResponse>, DomainError> {
    item.validate()?;

    Ok(Json(UpdateItemResponse { item_id, item }))
}

/// Read a single item by id.
///
/// The `q` parameter is echoed back only when it is present and non-empty.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = String, Path, description = "Item id"),
        ReadItemQuery
    ),
    responses(
        (status = 200, description = "The requested item id, with the query echo when given", body = ReadItemResponse)
    )
)]
pub async fn read_item(
    Path(item_id): Path<String>,
    Query(query): Query<ReadItemQuery>,
) -> Json<ReadItemResponse> {
    let q = query.q.filter(|q| !q.is_empty());
    Json(ReadItemResponse { item_id, q })
}

/// List catalog entries with skip/limit slicing.
///
/// Windows past the end of the catalog yield an empty list rather than an
/// error.
#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "The requested window of the catalog", body = [ItemSummary])
    )
)]
pub async fn list_items(Query(query): Query<ListItemsQuery>) -> Json<Vec<ItemSummary>> {
    let (skip, limit) = query.window();

    let entries = FAKE_ITEMS_DB
        .iter()
        .skip(skip)
        .take(limit)
        .map(|entry| ItemSummary {
            item_name: entry.item_name.to_string(),
        })
        .collect();

    Json(entries)
}
