use actix_web::{web, HttpResponse, Result};
use chrono::{Datelike, Utc};
use serde_json::json;
use sqlx::PgPool;

use crate::config::settings::CupSettings;
use crate::cup::CupService;
use crate::models::category::CategoryQuery;

/// Group-stage view of the cup for one category.
pub async fn get_cup_groups(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
    cup_settings: web::Data<CupSettings>,
) -> Result<HttpResponse> {
    let service = CupService::new(pool.get_ref().clone(), cup_settings.missing_rank);

    match service.group_stage(query.category).await {
        Ok(view) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": view
        }))),
        Err(e) => {
            tracing::error!("Failed to get cup groups for {}: {}", query.category, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load cup groups"
            })))
        }
    }
}

/// Knockout bracket of the cup for one category, including the champion
/// slot for the current year.
pub async fn get_cup_bracket(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
    cup_settings: web::Data<CupSettings>,
) -> Result<HttpResponse> {
    let service = CupService::new(pool.get_ref().clone(), cup_settings.missing_rank);
    let anno = Utc::now().year();

    match service.bracket(query.category, anno).await {
        Ok(view) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": view
        }))),
        Err(e) => {
            tracing::error!("Failed to get cup bracket for {}: {}", query.category, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load cup bracket"
            })))
        }
    }
}
