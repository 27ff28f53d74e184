// src/poller/mod.rs
mod error;
mod report;
mod runner;
mod session;

pub use error::PollError;
pub use report::Reporter;
pub use runner::{CycleResult, HealthResponse, Poller};
pub use session::{decode_body, HealthSession};
