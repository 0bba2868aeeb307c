pub mod config;
pub mod controllers;
pub mod routes;
pub mod server;
