pub mod api;
pub mod simulation;
