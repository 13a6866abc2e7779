use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;

use crate::handlers::SharedState;
use crate::models::view::Tab;
use crate::planner::stats::DashboardStats;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    active_tab: Tab,
    stats: DashboardStats,
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn get_dashboard(state: SharedState) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    Ok(HttpResponse::Ok().json(DashboardResponse {
        active_tab: state.active_tab(),
        stats: state.stats(),
    }))
}
