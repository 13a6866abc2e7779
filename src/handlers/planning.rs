use actix_web::{web, HttpResponse};
use serde::Deserialize;
use chrono::NaiveDate;
use validator::Validate;

use crate::errors::AppError;
use crate::handlers::SharedState;
use crate::models::view::ViewMode;
use crate::planner::calendar::Direction;
use crate::utils::validation::{validate_calendar_date, validate_payload};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanningUpdate {
    #[validate(custom = "validate_calendar_date")]
    reference_date: Option<NaiveDate>,
    view_mode: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavigateRequest {
    direction: String,
}

pub async fn get_planning(state: SharedState) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    Ok(HttpResponse::Ok().json(state.calendar()))
}

pub async fn update_planning(
    state: SharedState,
    update: web::Json<PlanningUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*update)?;
    let view_mode = update
        .view_mode
        .as_deref()
        .map(str::parse::<ViewMode>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let mut state = state.write().await;
    if let Some(mode) = view_mode {
        state.set_view_mode(mode);
    }
    if let Some(date) = update.reference_date {
        state.set_reference_date(date);
    }

    Ok(HttpResponse::Ok().json(state.calendar()))
}

pub async fn navigate(
    state: SharedState,
    request: web::Json<NavigateRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut state = state.write().await;

    let moved: Option<NaiveDate> = match request.direction.as_str() {
        "previous" => state.navigate(Direction::Previous),
        "next" => state.navigate(Direction::Next),
        "today" => Some(state.return_home()),
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown direction '{}', expected previous, next or today",
                other
            ))
            .into())
        }
    };

    if moved.is_none() {
        return Err(AppError::BadRequest("Calendar cannot move beyond the supported date range".to_string()).into());
    }

    Ok(HttpResponse::Ok().json(state.calendar()))
}
