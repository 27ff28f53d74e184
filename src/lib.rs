// src/lib.rs
pub mod config;
pub mod logging;
pub mod poller;
