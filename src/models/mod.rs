pub mod gap;
pub mod preferences;
pub mod segment;
