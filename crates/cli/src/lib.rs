//! Command-line front end for the gpr-runner task engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod services;
pub mod utils;
