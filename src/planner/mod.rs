pub mod calendar;
pub mod roster;
pub mod state;
pub mod stats;
