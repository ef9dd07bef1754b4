//! Server-rendered page handlers

use crate::error::ApiError;
use crate::handlers::cafes::CafeForm;
use crate::templates::{AddTemplate, ApiDocsTemplate, CafesTemplate, IndexTemplate, SearchTemplate};
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use cafe_types::title_case;
use serde::Deserialize;
use tracing::info;

/// GET /
pub async fn home() -> Result<Html<String>, ApiError> {
    Ok(Html(IndexTemplate.render()?))
}

/// GET /api-docs
pub async fn api_docs() -> Result<Html<String>, ApiError> {
    Ok(Html(ApiDocsTemplate.render()?))
}

/// GET /cafes
pub async fn cafes(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let cafes = state.db.list_cafes().await?;
    Ok(Html(CafesTemplate { cafes }.render()?))
}

/// GET /add
pub async fn add_form() -> Result<Html<String>, ApiError> {
    Ok(Html(AddTemplate.render()?))
}

/// POST /add
pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<CafeForm>,
) -> Result<Redirect, ApiError> {
    let new_cafe = form.into_new_cafe()?;
    info!("Adding cafe via form: {}", new_cafe.name);

    state.db.create_cafe(&new_cafe).await?;

    Ok(Redirect::to("/cafes"))
}

/// GET /search
pub async fn search_form() -> Result<Html<String>, ApiError> {
    Ok(Html(
        SearchTemplate {
            query: None,
            cafes: Vec::new(),
        }
        .render()?,
    ))
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    search_loc: String,
}

/// POST /search
///
/// The submitted location is title-cased before matching, so "london"
/// finds cafes stored under "London".
pub async fn search_submit(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let location = title_case(&form.search_loc);
    let cafes = state.db.list_cafes_by_location(&location).await?;

    Ok(Html(
        SearchTemplate {
            query: Some(location),
            cafes,
        }
        .render()?,
    ))
}
