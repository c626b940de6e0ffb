use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod calendar;
pub mod cup;
pub mod highlights;
pub mod registration;
pub mod standings;

use crate::middleware::admin::AdminMiddleware;
use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::health_check)
        .service(registration::register)
        .service(auth::login);

    // Public read-only surface
    cfg.service(standings::get_standings)
        .service(standings::get_scorers)
        .service(calendar::get_calendar)
        .service(calendar::get_calendar_teams)
        .service(cup::get_cup_groups)
        .service(cup::get_cup_bracket)
        .service(highlights::list_highlights);

    // Highlight interactions (require authentication)
    cfg.service(
        web::scope("/highlights")
            .wrap(AuthMiddleware)
            .service(highlights::record_view)
            .service(highlights::add_like),
    );

    // Admin routes (require admin role)
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            .service(admin::update_fixture_result)
            .service(admin::assign_champion),
    );
}
