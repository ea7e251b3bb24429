pub mod cli;
pub mod config;
pub mod discord;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod http;
pub mod model;
pub mod orthocal;
