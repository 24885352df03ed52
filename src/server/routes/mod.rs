pub mod heroes;
pub mod monitor;
