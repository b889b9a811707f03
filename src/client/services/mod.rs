pub mod generate_service;
pub mod presenter;
