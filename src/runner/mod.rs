pub mod api;
pub mod class;
pub mod config;
pub mod ds;
