//! Command implementations

pub mod tool;
