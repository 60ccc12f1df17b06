/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::future::Future;
use std::thread;

use anyhow::{Context, anyhow};
use aws_config::BehaviorVersion;
use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::config::Region;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};
use log::debug;
use tokio::runtime::{Builder, Handle, Runtime};

use super::CloudWatchApi;
use crate::{CredentialSource, MetricRecord, MetricUnit, PutMetricDataRequest};

/// CloudWatch client backed by the AWS SDK.
///
/// The SDK is async, so the client owns a current thread runtime to block on
/// each request. When called from a thread that is already inside a tokio
/// runtime the request is driven on a short lived helper thread instead, as
/// a runtime can not block on a future from within another one.
pub struct SdkCloudWatchClient {
    runtime: Option<Runtime>,
    client: Client,
}

impl SdkCloudWatchClient {
    pub fn new(source: &CredentialSource) -> anyhow::Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;

        // the default chain covers env vars, the shared profile files and
        // container / instance roles
        let loader = aws_config::defaults(BehaviorVersion::latest());
        let loader = match source {
            CredentialSource::SharedConfig => loader,
            CredentialSource::Environment { region } => loader
                .credentials_provider(EnvironmentVariableCredentialsProvider::new())
                .region(Region::new(region.clone())),
        };
        let sdk_config = block_on_runtime(&runtime, loader.load())?;
        let Some(region) = sdk_config.region() else {
            return Err(anyhow!("no region found in the aws config chain"));
        };
        debug!("cloudwatch client created for region {region}");

        let client = Client::new(&sdk_config);
        Ok(SdkCloudWatchClient {
            runtime: Some(runtime),
            client,
        })
    }

    fn block_on<F>(&self, fut: F) -> anyhow::Result<F::Output>
    where
        F: Future + Send,
        F::Output: Send,
    {
        let Some(runtime) = &self.runtime else {
            return Err(anyhow!("cloudwatch client runtime is already shut down"));
        };
        block_on_runtime(runtime, fut)
    }
}

impl Drop for SdkCloudWatchClient {
    fn drop(&mut self) {
        // a plain drop would block, which panics inside async code
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

fn block_on_runtime<F>(runtime: &Runtime, fut: F) -> anyhow::Result<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    if Handle::try_current().is_err() {
        return Ok(runtime.block_on(fut));
    }

    thread::scope(|s| {
        let handle = thread::Builder::new()
            .name("cloudwatch-put".to_string())
            .spawn_scoped(s, || runtime.block_on(fut))
            .context("failed to spawn cloudwatch request thread")?;
        handle
            .join()
            .map_err(|_| anyhow!("cloudwatch request thread panicked"))
    })
}

fn build_datum(record: &MetricRecord) -> MetricDatum {
    let dimensions = record
        .dimensions
        .iter()
        .map(|d| Dimension::builder().name(&d.name).value(&d.value).build())
        .collect();
    let unit = match record.unit {
        MetricUnit::None => StandardUnit::None,
    };
    MetricDatum::builder()
        .metric_name(&record.name)
        .value(record.value)
        .unit(unit)
        .set_dimensions(Some(dimensions))
        .timestamp(DateTime::from_millis(record.timestamp.timestamp_millis()))
        .build()
}

impl CloudWatchApi for SdkCloudWatchClient {
    fn put_metric_data(&self, req: &PutMetricDataRequest) -> anyhow::Result<()> {
        let data = req.records.iter().map(build_datum).collect();
        let fut = self
            .client
            .put_metric_data()
            .namespace(&req.namespace)
            .set_metric_data(Some(data))
            .send();
        self.block_on(fut)?
            .map_err(|e| anyhow!("{}", DisplayErrorContext(e)))?;
        Ok(())
    }
}
