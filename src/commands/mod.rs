//! CLI commands for graphwalk

pub mod dispatch;
pub mod info;
pub mod report;
pub mod run;
