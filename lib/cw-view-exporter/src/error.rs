/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use cw_view_types::AggregationKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no credential source specified, set one of use_shared_config / use_env_credentials")]
    NoCredentialSource,
    #[error("use_shared_config and use_env_credentials are mutually exclusive")]
    ConflictingCredentialSource,
    #[error("region is required when use_env_credentials is set")]
    MissingRegion,
    #[error("namespace is not set")]
    MissingNamespace,
    #[error("max data points should be greater than 0")]
    InvalidMaxDataPoints,
    #[error("failed to create cloudwatch client: {0:?}")]
    Client(anyhow::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("view {view}: aggregation {kind} is not yet supported")]
    UnsupportedAggregation { view: String, kind: AggregationKind },
}

/// Failures reported to the error callback of the exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("translate: {0}")]
    Translate(#[from] TranslateError),
    #[error("put metric data: {0:?}")]
    Transport(anyhow::Error),
}

