pub mod chart_service;
pub mod market_service;
pub mod palette;
pub mod suggestion_service;
