//! Command implementations for campusnet

pub mod dispatch;
pub mod layout;
pub mod load;
pub mod paths;
pub mod show;
