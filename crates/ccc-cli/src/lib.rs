//! CLI library components for the country code converter.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
