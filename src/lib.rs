pub mod classify;
pub mod collector;
pub mod config;
pub mod constants;
pub mod countries;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod logging;
pub mod store;
pub mod types;
