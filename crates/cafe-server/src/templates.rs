//! Askama templates for the server-rendered pages

use askama::Template;
use cafe_types::Cafe;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "api_docs.html")]
pub struct ApiDocsTemplate;

/// Cafe listing, also used for the add-form redirect target.
#[derive(Template)]
#[template(path = "cafes.html")]
pub struct CafesTemplate {
    pub cafes: Vec<Cafe>,
}

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddTemplate;

/// Search page; `query` is the normalized location once a search was run.
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub query: Option<String>,
    pub cafes: Vec<Cafe>,
}
