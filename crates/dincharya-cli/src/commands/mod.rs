pub mod character;
pub mod completions;
pub mod config;
pub mod quiz;
pub mod routine;
