use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::jdbc::{self, Dialect, ParamMap};

/// Data source settings bound from configuration.
///
/// The `parameter` section groups extra URL parameters by dialect name; only
/// the group matching the URL's dialect is applied.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceConfig {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub parameter: HashMap<String, ParamMap>,
}

impl DataSourceConfig {
    /// Effective JDBC URL with the matching parameter group merged in.
    ///
    /// A URL whose dialect has no parameter group is returned unchanged.
    pub fn effective_url(&self) -> Result<String> {
        let dialect = Dialect::for_url(&self.url)?;

        match self.parameter.get(dialect.name()) {
            Some(params) => {
                // URLs and credentials stay out of the logs
                debug!(
                    dialect = dialect.name(),
                    parameters = params.len(),
                    "merging data source URL parameters"
                );
                jdbc::merge(&self.url, params)
            }
            None => Ok(self.url.clone()),
        }
    }
}
