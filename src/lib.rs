pub mod config;
pub mod dto;
pub mod error;
pub mod fixtures;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod query;
pub mod repository;
pub mod response;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
