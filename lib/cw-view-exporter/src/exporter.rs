/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use log::{debug, error, warn};

use cw_view_types::{ViewData, ViewExporter};

use crate::{
    CloudWatchApi, ConfigError, ExportError, ExporterConfig, MetricRecord, PutMetricDataRequest,
    SdkCloudWatchClient,
};

/// Exporter of view snapshots to CloudWatch.
///
/// Holds only the config and the client, both immutable after construction,
/// so concurrent `export` calls are safe as long as the client is.
pub struct CloudWatchExporter {
    config: ExporterConfig,
    client: Arc<dyn CloudWatchApi>,
}

impl CloudWatchExporter {
    /// Create an exporter with an AWS SDK client for the configured credential source.
    pub fn new(config: ExporterConfig) -> Result<Self, ConfigError> {
        let source = config.check()?;
        let client = SdkCloudWatchClient::new(&source).map_err(ConfigError::Client)?;
        Ok(CloudWatchExporter {
            config,
            client: Arc::new(client),
        })
    }

    /// Create an exporter that sends through `client`.
    ///
    /// The credential options in `config` are not used.
    pub fn with_client(
        config: ExporterConfig,
        client: Arc<dyn CloudWatchApi>,
    ) -> Result<Self, ConfigError> {
        config.check_export()?;
        Ok(CloudWatchExporter { config, client })
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Translate the snapshot and send it, reporting every failure.
    ///
    /// Nothing is returned to the caller, failures go to the error callback.
    /// No request is sent if there is no record, and the records are split
    /// into several requests if there are more than `max_data_points`.
    pub fn export(&self, vd: &ViewData) {
        debug!(
            "cloudwatch exporter {}: exporting {} view {} with {} rows ({} - {})",
            self.config.namespace,
            vd.aggregation,
            vd.name,
            vd.rows.len(),
            vd.start,
            vd.end
        );
        let translation = crate::translate(vd);
        for e in translation.errors {
            warn!(
                "cloudwatch exporter {}: dropped row: {e}",
                self.config.namespace
            );
            self.report(ExportError::Translate(e));
        }

        if translation.records.is_empty() {
            debug!(
                "cloudwatch exporter {}: nothing to send for view {}",
                self.config.namespace, vd.name
            );
            return;
        }

        for records in translation.records.chunks(self.config.max_data_points) {
            if let Err(e) = self.send_records(records) {
                error!(
                    "cloudwatch exporter {}: failed to send {} records of view {}: {e}",
                    self.config.namespace,
                    records.len(),
                    vd.name
                );
                self.report(e);
            }
        }
    }

    /// Send the records in one PutMetricData request.
    pub fn send_records(&self, records: &[MetricRecord]) -> Result<(), ExportError> {
        let req = PutMetricDataRequest {
            namespace: self.config.namespace.clone(),
            records: records.to_vec(),
        };
        debug!(
            "cloudwatch exporter {}: sending {} records",
            req.namespace,
            req.records.len()
        );
        self.client
            .put_metric_data(&req)
            .map_err(ExportError::Transport)
    }

    fn report(&self, e: ExportError) {
        if let Some(on_error) = &self.config.on_error {
            on_error(e);
        }
    }
}

impl ViewExporter for CloudWatchExporter {
    fn export_view(&self, data: &ViewData) {
        self.export(data);
    }
}
