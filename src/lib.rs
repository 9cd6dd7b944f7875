// Library for tests to access modules

pub mod classifier;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod procfs_repo;
pub mod routes;
pub mod sample_store;
pub mod usage;
