/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::sync::Arc;

use crate::{ConfigError, ExportError};

#[cfg(feature = "yaml")]
mod yaml;

/// Maximum number of metric datums CloudWatch accepts in one PutMetricData call.
const DEFAULT_MAX_DATA_POINTS: usize = 1000;

pub type ErrorCallback = Arc<dyn Fn(ExportError) + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// Credentials and region from the AWS SDK default chain: environment
    /// variables, shared config / credentials files, container and instance roles
    SharedConfig,
    /// Credentials from AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY
    Environment { region: String },
}

#[derive(Clone)]
pub struct ExporterConfig {
    pub namespace: String,
    /// Called for every failure of [`export`](crate::CloudWatchExporter::export).
    /// The failure is only logged if not set.
    pub on_error: Option<ErrorCallback>,
    pub use_shared_config: bool,
    pub use_env_credentials: bool,
    /// Required if `use_env_credentials` is set
    pub region: String,
    pub max_data_points: usize,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        ExporterConfig {
            namespace: String::new(),
            on_error: None,
            use_shared_config: false,
            use_env_credentials: false,
            region: String::new(),
            max_data_points: DEFAULT_MAX_DATA_POINTS,
        }
    }
}

impl fmt::Debug for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterConfig")
            .field("namespace", &self.namespace)
            .field("on_error", &self.on_error.is_some())
            .field("use_shared_config", &self.use_shared_config)
            .field("use_env_credentials", &self.use_env_credentials)
            .field("region", &self.region)
            .field("max_data_points", &self.max_data_points)
            .finish()
    }
}

impl ExporterConfig {
    pub fn new(namespace: &str) -> Self {
        ExporterConfig {
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }

    pub fn with_on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(ExportError) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }

    pub(crate) fn check_export(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::MissingNamespace);
        }
        if self.max_data_points == 0 {
            return Err(ConfigError::InvalidMaxDataPoints);
        }
        Ok(())
    }

    /// Validate the config and resolve the credential source to use.
    pub fn check(&self) -> Result<CredentialSource, ConfigError> {
        self.check_export()?;
        match (self.use_shared_config, self.use_env_credentials) {
            (true, false) => Ok(CredentialSource::SharedConfig),
            (false, true) => {
                if self.region.is_empty() {
                    Err(ConfigError::MissingRegion)
                } else {
                    Ok(CredentialSource::Environment {
                        region: self.region.clone(),
                    })
                }
            }
            (true, true) => Err(ConfigError::ConflictingCredentialSource),
            (false, false) => Err(ConfigError::NoCredentialSource),
        }
    }
}
