use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::highlights_handler;
use crate::middleware::auth::Claims;
use crate::models::highlight::HighlightsQuery;

#[get("/highlights")]
pub async fn list_highlights(
    query: web::Query<HighlightsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    highlights_handler::list_highlights(query, pool).await
}

#[post("/{id}/view")]
pub async fn record_view(
    path: web::Path<i64>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    highlights_handler::record_view(path.into_inner(), pool, claims).await
}

#[post("/{id}/like")]
pub async fn add_like(
    path: web::Path<i64>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    highlights_handler::add_like(path.into_inner(), pool, claims).await
}
