pub mod app_state;
pub mod generation;
pub mod messages;
