//! Database access: connection pooling and repository implementations.

pub mod connection;
pub mod mysql;
