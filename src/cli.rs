//! Command line interface for typomatch.

pub mod args;
pub mod commands;
pub mod output;
