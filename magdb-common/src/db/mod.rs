//! Database models and queries

pub mod connect;
pub mod models;
pub mod queries;

pub use connect::*;
pub use models::*;
pub use queries::*;
