// Library exports for testing and for the server binary

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
