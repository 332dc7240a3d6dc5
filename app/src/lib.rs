//! Fitness Planner Application Library
//!
//! This library exposes the app modules for use in tests and the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
