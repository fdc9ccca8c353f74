pub mod browser;
pub mod native;
