//! Composes effective JDBC connection URLs from a base URL and structured,
//! dialect-keyed parameter maps.

pub mod datasource;
pub mod error;
pub mod jdbc;

pub use crate::datasource::DataSourceConfig;
pub use crate::error::{Error, Result};
pub use crate::jdbc::{merge, ParamMap};
