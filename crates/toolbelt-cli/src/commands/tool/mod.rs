//! Tool commands

pub mod describe;
pub mod invoke;
pub mod list;
