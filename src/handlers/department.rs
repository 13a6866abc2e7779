use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::handlers::SharedState;

#[derive(Deserialize)]
pub struct DepartmentQueryParams {
    name: Option<String>,
}

pub async fn get_departments(
    state: SharedState,
    query: web::Query<DepartmentQueryParams>,
) -> Result<HttpResponse, actix_web::Error> {
    let state = state.read().await;
    let needle = query.name.as_deref().map(str::to_lowercase);

    let departments: Vec<_> = state
        .headcounts()
        .into_iter()
        .filter(|entry| match &needle {
            Some(needle) => entry.department.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    Ok(HttpResponse::Ok().json(departments))
}
