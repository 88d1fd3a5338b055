//! Command implementations for shortpath

pub mod dispatch;
pub mod ladder;
pub mod paths;
