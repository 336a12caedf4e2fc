pub mod chart;
pub mod lists;
pub mod overlay;
pub mod popup;
pub mod sidebar;
pub mod tables;
