pub mod app;
pub mod cli;
pub mod commands;
pub mod context;
pub mod controller;
pub mod render;
pub mod rest;
pub mod source;
pub mod tracing;
pub mod types;
