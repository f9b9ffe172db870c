//! Core functionality: records, key-value stores, the storage gateway and
//! configuration

pub mod config;
pub mod gateway;
pub mod ids;
pub mod model;
pub mod store;
