use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use tokio::sync::RwLock;
use log::info;

use gmsi_planning_backend::config::AppConfig;
use gmsi_planning_backend::data::load_dataset;
use gmsi_planning_backend::handlers::file::ImportPolicy;
use gmsi_planning_backend::planner::state::PlannerState;
use gmsi_planning_backend::{configure, not_found};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let dataset = load_dataset(config.data_path.as_deref()).await?;

    let planner = PlannerState::new(dataset, config.reference_date);
    planner.report_headcount_drift();

    let state = web::Data::new(RwLock::new(planner));
    let policy = web::Data::new(ImportPolicy {
        max_bytes: config.import_max_bytes,
    });

    info!(
        "Starting server at {}:{} (reference date {})",
        config.host, config.port, config.reference_date
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(policy.clone())
            .configure(configure)
            .default_service(web::route().to(not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
