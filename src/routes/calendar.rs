use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::calendar_handler;
use crate::models::category::CategoryQuery;
use crate::models::fixture::CalendarQuery;

#[get("/calendar")]
pub async fn get_calendar(
    query: web::Query<CalendarQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    calendar_handler::get_calendar(query, pool).await
}

#[get("/calendar/teams")]
pub async fn get_calendar_teams(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    calendar_handler::get_calendar_teams(query, pool).await
}
