//! Command-line inspection of the blog article catalog.

pub mod cli;
pub mod commands;
