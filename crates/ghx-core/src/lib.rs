pub mod config;
pub mod logging;

pub mod explorer;
pub mod lookup;
pub mod repository;
pub mod route;
pub mod store;
