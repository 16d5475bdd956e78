pub mod client;
pub mod configure;
pub mod generator;
pub mod logger;
pub mod models;
