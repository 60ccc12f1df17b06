/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{ConfigError, ExportError, TranslateError};

mod name;
pub use name::sanitize_name;

mod record;
pub use record::{Dimension, MetricRecord, MetricUnit, PutMetricDataRequest};

mod translate;
pub use translate::{Translation, translate};

mod config;
pub use config::{CredentialSource, ErrorCallback, ExporterConfig};

mod client;
pub use client::{CloudWatchApi, SdkCloudWatchClient};

mod exporter;
pub use exporter::CloudWatchExporter;
