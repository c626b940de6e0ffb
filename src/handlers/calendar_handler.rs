use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::league::calendar::{next_fixture_id, CalendarService};
use crate::models::category::CategoryQuery;
use crate::models::fixture::{CalendarQuery, CalendarResponse};

/// Fixture list for one category, optionally filtered by team. When a team
/// filter is active the response also points at the team's next fixture.
pub async fn get_calendar(
    query: web::Query<CalendarQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = CalendarService::new(pool.get_ref().clone());

    match service
        .get_fixtures(query.category, query.team.as_deref())
        .await
    {
        Ok(fixtures) => {
            let next_fixture_id = query
                .team
                .as_ref()
                .and_then(|_| next_fixture_id(&fixtures, Utc::now().date_naive()));
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": CalendarResponse { fixtures, next_fixture_id }
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get calendar for {}: {}", query, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load calendar"
            })))
        }
    }
}

/// Team names for the calendar filter dropdown.
pub async fn get_calendar_teams(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = CalendarService::new(pool.get_ref().clone());

    match service.get_teams(query.category).await {
        Ok(teams) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": teams
        }))),
        Err(e) => {
            tracing::error!("Failed to get teams for {}: {}", query.category, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to load teams"
            })))
        }
    }
}
