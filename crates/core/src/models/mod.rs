pub mod asset;
pub mod chart;
pub mod controls;
pub mod history;
pub mod session;
pub mod settings;
pub mod suggestion;
pub mod theme;
