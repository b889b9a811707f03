pub mod logger;
pub mod preview;
pub mod studio;
