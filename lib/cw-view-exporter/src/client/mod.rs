/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::PutMetricDataRequest;

mod sdk;
pub use sdk::SdkCloudWatchClient;

/// The write side of the CloudWatch API.
///
/// The exporter holds no lock around the client, implementations must be
/// safe to call from several threads at once.
pub trait CloudWatchApi: Send + Sync {
    /// Send one PutMetricData request, blocking until it is done.
    fn put_metric_data(&self, req: &PutMetricDataRequest) -> anyhow::Result<()>;
}
