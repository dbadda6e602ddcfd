pub mod aggregator_service;
pub mod chart_service;
pub mod render_service;
