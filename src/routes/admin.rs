use actix_web::{post, put, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::admin_handler;
use crate::middleware::auth::Claims;
use crate::models::cup::ChampionRequest;
use crate::models::fixture::FixtureResultRequest;

#[put("/fixtures/{id}/result")]
pub async fn update_fixture_result(
    path: web::Path<i64>,
    request: web::Json<FixtureResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    admin_handler::update_fixture_result(path.into_inner(), request, pool, claims).await
}

#[post("/champions")]
pub async fn assign_champion(
    request: web::Json<ChampionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    admin_handler::assign_champion(request, pool, claims).await
}
