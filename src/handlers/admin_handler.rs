use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;

use crate::league::validation::AdminValidator;
use crate::middleware::auth::Claims;
use crate::models::cup::ChampionRequest;
use crate::models::fixture::FixtureResultRequest;

/// Records or corrects a fixture result. The score pair is stored in the
/// canonical "H-A" form that the cup bracket and calendar parse back out.
pub async fn update_fixture_result(
    fixture_id: i64,
    request: web::Json<FixtureResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let validator = AdminValidator::new();

    if let Err(e) = validator.validate_result(&request) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": e.to_string()
        })));
    }

    let risultato = format!("{}-{}", request.home_score, request.away_score);

    let result = sqlx::query(
        r#"
        UPDATE fixtures
        SET risultato = $1
        WHERE id = $2
        "#,
    )
    .bind(&risultato)
    .bind(fixture_id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Fixture not found"
        }))),
        Ok(_) => {
            tracing::info!(
                "Admin {} set result {} on fixture {}",
                claims.username,
                risultato,
                fixture_id
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Result saved"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to update fixture {}: {}", fixture_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to save result"
            })))
        }
    }
}

/// Assigns the cup champion for a category and year. Reassigning the same
/// year overwrites the previous record.
pub async fn assign_champion(
    request: web::Json<ChampionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let validator = AdminValidator::new();

    if let Err(e) = validator.validate_champion(&request) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": e.to_string()
        })));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO cup_champions (category, squadra, anno)
        VALUES ($1, $2, $3)
        ON CONFLICT (category, anno)
        DO UPDATE SET squadra = EXCLUDED.squadra
        "#,
    )
    .bind(request.category)
    .bind(request.squadra.trim())
    .bind(request.anno)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            tracing::info!(
                "Admin {} assigned {} champion {} for {}",
                claims.username,
                request.category,
                request.squadra.trim(),
                request.anno
            );
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Champion saved"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to assign champion: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to save champion"
            })))
        }
    }
}
