//! Command implementations behind the `goktool` binary.

pub mod commands;
