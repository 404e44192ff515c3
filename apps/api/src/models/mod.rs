pub mod opportunity;
pub mod preferences;
