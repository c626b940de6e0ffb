use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::highlights::HighlightsService;
use crate::middleware::auth::Claims;
use crate::models::highlight::HighlightsQuery;

/// Gallery listing with optional category and media-type filters.
pub async fn list_highlights(
    query: web::Query<HighlightsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = HighlightsService::new(pool.get_ref().clone());

    match service.list(query.category, query.file_type).await {
        Ok(highlights) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": highlights
        }))),
        Err(e) => {
            tracing::error!("Failed to list highlights ({}): {}", query, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load highlights"
            })))
        }
    }
}

pub async fn record_view(
    highlight_id: i64,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = HighlightsService::new(pool.get_ref().clone());

    match service.record_view(highlight_id).await {
        Ok(Some(highlight)) => {
            tracing::info!(
                "User {} viewed highlight {}",
                claims.username,
                highlight_id
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": highlight
            })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Highlight not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to record view for highlight {}: {}", highlight_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to update highlight"
            })))
        }
    }
}

pub async fn add_like(
    highlight_id: i64,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let service = HighlightsService::new(pool.get_ref().clone());

    match service.add_like(highlight_id).await {
        Ok(Some(highlight)) => {
            tracing::info!(
                "User {} liked highlight {}",
                claims.username,
                highlight_id
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": highlight
            })))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Highlight not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to add like for highlight {}: {}", highlight_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to update highlight"
            })))
        }
    }
}
