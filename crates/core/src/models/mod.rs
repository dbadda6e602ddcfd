pub mod chart;
pub mod session;
pub mod settings;
pub mod transaction;
pub mod user;
