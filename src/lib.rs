// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod engine;
pub mod error;
pub mod gui;
pub mod log;
pub mod progress;
pub mod runner;
pub mod table;

pub use error::{Result, ScoutError};
