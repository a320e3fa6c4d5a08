//! Command-line front end
//!
//! This module provides the interactive game loop and the position analyzer
//! behind the `ttt` binary.

pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;
