pub mod config;
pub mod iv;
pub mod pixel;
pub mod region;
