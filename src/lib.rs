pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod tasks;
pub mod voting;
