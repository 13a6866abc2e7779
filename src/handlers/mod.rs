use actix_web::web;
use tokio::sync::RwLock;

use crate::planner::state::PlannerState;

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod file;
pub mod navigation;
pub mod planning;

pub type SharedState = web::Data<RwLock<PlannerState>>;
