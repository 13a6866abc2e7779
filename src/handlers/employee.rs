use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::handlers::SharedState;
use crate::models::employee::Employee;
use crate::planner::roster::DepartmentSelector;
use crate::planner::state::PlannerState;

/// Any string is a valid filter. An unknown department yields an empty roster.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RosterFilterUpdate {
    search: Option<String>,
    department: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RosterResponse<'a> {
    search: &'a str,
    department: &'a DepartmentSelector,
    total: usize,
    employees: Vec<&'a Employee>,
}

fn roster_response(state: &PlannerState) -> HttpResponse {
    HttpResponse::Ok().json(RosterResponse {
        search: state.search(),
        department: state.department(),
        total: state.dataset().employees.len(),
        employees: state.roster(),
    })
}

pub async fn get_employees(state: SharedState) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    Ok(roster_response(&state))
}

pub async fn update_filter(
    state: SharedState,
    update: web::Json<RosterFilterUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let update = update.into_inner();

    let mut state = state.write().await;
    if let Some(search) = update.search {
        state.set_search(search);
    }
    if let Some(department) = update.department {
        state.set_department(DepartmentSelector::from(department.as_str()));
    }

    Ok(roster_response(&state))
}
