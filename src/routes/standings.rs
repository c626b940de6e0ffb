use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::standings_handler;
use crate::models::category::CategoryQuery;

#[get("/standings")]
pub async fn get_standings(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    standings_handler::get_standings(query, pool).await
}

#[get("/scorers")]
pub async fn get_scorers(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    standings_handler::get_scorers(query, pool).await
}
