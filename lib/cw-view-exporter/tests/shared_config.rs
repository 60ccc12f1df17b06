/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::env;

use cw_view_exporter::{CloudWatchExporter, CredentialSource, ExporterConfig, SdkCloudWatchClient};

// region only from the environment, no profile files and no instance metadata
fn setup_env() {
    let missing = env::temp_dir().join("cw-view-exporter-no-such-dir");
    // SAFETY: the only test in this binary, run before any thread reads the env
    unsafe {
        env::set_var("AWS_REGION", "us-east-1");
        env::set_var("HOME", &missing);
        env::set_var("AWS_CONFIG_FILE", missing.join("config"));
        env::set_var("AWS_SHARED_CREDENTIALS_FILE", missing.join("credentials"));
        env::set_var("AWS_EC2_METADATA_DISABLED", "true");
        env::remove_var("AWS_PROFILE");
    }
}

#[test]
fn shared_config_region_from_env() {
    setup_env();

    SdkCloudWatchClient::new(&CredentialSource::SharedConfig).unwrap();

    let mut config = ExporterConfig::new("demo");
    config.use_shared_config = true;
    let exporter = CloudWatchExporter::new(config).unwrap();
    assert_eq!(exporter.namespace(), "demo");
}
