//! Tests for get-info and show-config CLI commands
//!
//! These are simple commands that display static/config information.

use crate::cli::test_helpers::create_cli_test_services;
use studymate::cli::commands::config::{execute as execute_config, ConfigArgs};
use studymate::cli::commands::info::{execute as execute_info, InfoArgs};
use studymate::cli::OutputFormat;

// =============================================================================
// get-info tests
// =============================================================================

#[tokio::test]
async fn test_info_human() {
    let services = create_cli_test_services();

    let args = InfoArgs { detailed: false };
    let result = execute_info(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Get info should succeed");
}

#[tokio::test]
async fn test_info_detailed_json() {
    let services = create_cli_test_services();

    let args = InfoArgs { detailed: true };
    let result = execute_info(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Get info (JSON) should succeed");
}

// =============================================================================
// show-config tests
// =============================================================================

#[tokio::test]
async fn test_show_config_human() {
    let services = create_cli_test_services();

    let args = ConfigArgs { toml: false };
    let result = execute_config(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

#[tokio::test]
async fn test_show_config_json() {
    let services = create_cli_test_services();

    let args = ConfigArgs { toml: false };
    let result = execute_config(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}

#[tokio::test]
async fn test_show_config_toml() {
    let services = create_cli_test_services();

    let args = ConfigArgs { toml: true };
    let result = execute_config(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config (TOML) should succeed");
}
