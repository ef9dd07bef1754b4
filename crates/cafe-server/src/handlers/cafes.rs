//! Cafe API handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use cafe_types::{parse_checkbox, Cafe, NewCafe};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

#[derive(Debug, Serialize)]
pub struct CafeListResponse {
    cafes: Vec<Cafe>,
}

/// Form payload shared by `/api/add` and the HTML `/add` page.
///
/// Checkbox fields arrive as optional strings and go through explicit
/// boolean parsing; an unrecognized value is a 400, not a silent true.
#[derive(Debug, Deserialize)]
pub struct CafeForm {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: String,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl CafeForm {
    pub fn into_new_cafe(self) -> Result<NewCafe, ApiError> {
        let has_toilet = parse_checkbox(self.has_toilet.as_deref())
            .map_err(|e| ApiError::BadRequest(format!("has_toilet: {}", e)))?;
        let has_wifi = parse_checkbox(self.has_wifi.as_deref())
            .map_err(|e| ApiError::BadRequest(format!("has_wifi: {}", e)))?;
        let can_take_calls = parse_checkbox(self.can_take_calls.as_deref())
            .map_err(|e| ApiError::BadRequest(format!("can_take_calls: {}", e)))?;

        Ok(NewCafe {
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            has_toilet,
            has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls,
            // An empty price field means "no price", not an empty descriptor.
            coffee_price: self.coffee_price.filter(|p| !p.trim().is_empty()),
        })
    }
}

fn success(message: &str) -> Json<Value> {
    Json(json!({ "response": { "success": message } }))
}

/// GET /api/all
pub async fn all(State(state): State<AppState>) -> Result<Json<CafeListResponse>, ApiError> {
    let cafes = state.db.list_cafes().await?;
    Ok(Json(CafeListResponse { cafes }))
}

/// POST /api/add
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CafeForm>,
) -> Result<Json<Value>, ApiError> {
    let new_cafe = form.into_new_cafe()?;
    info!("Adding cafe: {}", new_cafe.name);

    let id = state.db.create_cafe(&new_cafe).await?;
    info!("Cafe added with id {}", id);

    Ok(success("Successfully added the new cafe."))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    location: String,
}

/// GET /api/search?location=...
///
/// Exact-match lookup; the HTML search page normalizes case, this one
/// does not.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<CafeListResponse>, ApiError> {
    let cafes = state.db.list_cafes_by_location(&params.location).await?;

    if cafes.is_empty() {
        return Err(ApiError::LocationNotFound);
    }

    Ok(Json(CafeListResponse { cafes }))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceParams {
    new_price: String,
}

/// PATCH /api/update-price/:id?new_price=...
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UpdatePriceParams>,
) -> Result<Json<Value>, ApiError> {
    info!("Updating price for cafe {}", id);

    let updated = state.db.update_coffee_price(id, &params.new_price).await?;
    if !updated {
        return Err(ApiError::CafeNotFound);
    }

    Ok(success("Successfully updated the price."))
}

#[derive(Debug, Deserialize)]
pub struct ReportClosedParams {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
}

/// DELETE /api/report-closed/:id?api-key=...
///
/// The key is checked before the lookup, so a wrong key is a 403 whether
/// or not the cafe exists.
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ReportClosedParams>,
) -> Result<Json<Value>, ApiError> {
    if params.api_key.as_deref() != Some(state.api_key.as_ref()) {
        return Err(ApiError::Forbidden);
    }

    info!("Deleting cafe {}", id);

    let deleted = state.db.delete_cafe(id).await?;
    if !deleted {
        return Err(ApiError::CafeNotFound);
    }

    Ok(success("Successfully deleted the cafe from the database."))
}
