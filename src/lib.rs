pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod model;
pub mod sim;
pub mod validate;

#[cfg(feature = "full")]
pub mod api;
#[cfg(feature = "full")]
pub mod cli;
#[cfg(feature = "full")]
pub mod commands;
#[cfg(feature = "full")]
pub mod market;
#[cfg(feature = "full")]
pub mod report;
#[cfg(feature = "full")]
pub mod schema;
