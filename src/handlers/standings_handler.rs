use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::league::standings::StandingsService;
use crate::models::category::CategoryQuery;

/// League standings for one category.
pub async fn get_standings(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = StandingsService::new(pool.get_ref().clone());

    match service.get_standings(query.category).await {
        Ok(standings) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": standings
        }))),
        Err(e) => {
            tracing::error!("Failed to get standings for {}: {}", query.category, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load standings"
            })))
        }
    }
}

/// Top scorers for one category.
pub async fn get_scorers(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = StandingsService::new(pool.get_ref().clone());

    match service.get_scorers(query.category).await {
        Ok(scorers) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": scorers
        }))),
        Err(e) => {
            tracing::error!("Failed to get scorers for {}: {}", query.category, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load scorers"
            })))
        }
    }
}
