use actix_web::{get, http::StatusCode, web, HttpResponse};
use serde::Deserialize;

use crate::domain::SearchMode;

use super::views::{render, SearchTemplate};

#[derive(Deserialize)]
struct DefaultQuery {
    #[serde(default)]
    mode: SearchMode,
}

#[get("/")]
pub async fn default(query: web::Query<DefaultQuery>) -> HttpResponse {
    render(StatusCode::OK, SearchTemplate::empty(query.mode))
}
