//! Item endpoints
//!
//! Reads take a replica session, writes take a primary session. The
//! session lives for the handler body and is dropped on every return path.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Item, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::ItemName;

/// Create item request
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
}

/// Item response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

/// GET /items - all items from the replica, ascending by id
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let mut session = state.datasources.replica.session().await?;
    let items = ItemRepo::new(&mut session).list().await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items - insert on the primary
///
/// The body is validated before a connection is taken, so a bad request
/// is rejected even when the primary is down.
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let name = ItemName::new(&req.name)?;

    let mut session = state.datasources.primary.session().await?;
    let mut repo = ItemRepo::new(&mut session);
    // Checked on every write so startup never depends on the primary
    repo.ensure_table().await?;
    let item = repo.create(&name).await?;

    tracing::info!(id = item.id, "Item created");
    Ok(Json(ItemResponse::from(item)))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/items", get(list_items).post(create_item))
}
