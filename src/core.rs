pub mod chart;
pub mod date_range;
pub mod distribution;
pub mod report;
pub mod series;
pub mod summary;
