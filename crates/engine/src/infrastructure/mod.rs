//! Infrastructure: clock port and adapters, environment configuration.

pub mod clock;
pub mod config;
pub mod ports;
