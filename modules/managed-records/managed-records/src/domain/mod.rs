pub mod aggregate;
pub mod classify;
pub mod decoder;
pub mod error;
pub mod options;
pub mod query;
pub mod service;
pub mod transport;
