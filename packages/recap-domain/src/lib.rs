pub mod format;
pub mod period;
pub mod plan;
pub mod status;
