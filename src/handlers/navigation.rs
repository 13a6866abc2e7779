use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::handlers::SharedState;
use crate::models::view::Tab;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TabUpdate {
    tab: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TabResponse {
    active_tab: Tab,
    tabs: [Tab; 4],
    changed: bool,
}

pub async fn get_tab(state: SharedState) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    Ok(HttpResponse::Ok().json(TabResponse {
        active_tab: state.active_tab(),
        tabs: Tab::ALL,
        changed: false,
    }))
}

pub async fn set_tab(
    state: SharedState,
    update: web::Json<TabUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let tab = update.tab.parse::<Tab>().map_err(AppError::BadRequest)?;

    let mut state = state.write().await;
    let changed = state.set_tab(tab);

    Ok(HttpResponse::Ok().json(TabResponse {
        active_tab: state.active_tab(),
        tabs: Tab::ALL,
        changed,
    }))
}
