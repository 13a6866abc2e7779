pub mod config;
pub mod data;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod planner;
pub mod utils;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;

/// Routes of the planning API. Callers register the shared
/// `RwLock<PlannerState>` and the `ImportPolicy` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(web::resource("/v1/health").route(web::get().to(handlers::dashboard::health)))
    .service(
        web::resource("/v1/tab")
            .route(web::get().to(handlers::navigation::get_tab))
            .route(web::patch().to(handlers::navigation::set_tab)),
    )
    .service(web::resource("/v1/dashboard").route(web::get().to(handlers::dashboard::get_dashboard)))
    .service(web::resource("/v1/employee").route(web::get().to(handlers::employee::get_employees)))
    .service(
        web::resource("/v1/employee/filter").route(web::patch().to(handlers::employee::update_filter)),
    )
    .service(web::resource("/v1/department").route(web::get().to(handlers::department::get_departments)))
    .service(
        web::resource("/v1/planning")
            .route(web::get().to(handlers::planning::get_planning))
            .route(web::patch().to(handlers::planning::update_planning)),
    )
    .service(web::resource("/v1/planning/navigate").route(web::post().to(handlers::planning::navigate)))
    .service(
        web::resource("/v1/file")
            .route(web::post().to(handlers::file::import_file))
            .route(web::get().to(handlers::file::get_imports)),
    )
    .service(web::resource("/v1/export").route(web::post().to(handlers::file::export)));
}

pub async fn not_found() -> Result<HttpResponse, actix_web::Error> {
    Err(AppError::NotFound("No such route".to_string()).into())
}
