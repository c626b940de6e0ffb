use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::config::settings::CupSettings;
use crate::handlers::cup_handler;
use crate::models::category::CategoryQuery;

#[get("/cup/groups")]
pub async fn get_cup_groups(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
    cup_settings: web::Data<CupSettings>,
) -> Result<HttpResponse> {
    cup_handler::get_cup_groups(query, pool, cup_settings).await
}

#[get("/cup/bracket")]
pub async fn get_cup_bracket(
    query: web::Query<CategoryQuery>,
    pool: web::Data<PgPool>,
    cup_settings: web::Data<CupSettings>,
) -> Result<HttpResponse> {
    cup_handler::get_cup_bracket(query, pool, cup_settings).await
}
