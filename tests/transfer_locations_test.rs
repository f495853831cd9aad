use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use ss_provision::{EnsureOutcome, Provisioner, StorageServiceClient, TransferCliConfig};

#[tokio::test]
async fn test_only_missing_transfer_location_is_created() -> Result<()> {
    let server = MockServer::start();
    let config =
        TransferCliConfig::try_parse_from(["transfer-locations", "--base-url", server.base_url().as_str()])
            .unwrap();

    // /home/automated 已存在,/home/interactive 缺少
    let location_list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/location/")
            .header("Authorization", "ApiKey test:test");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "objects": [
                    {"path": "/home/automated", "purpose": "TS",
                     "resource_uri": "/api/v2/location/5f61fe88/"}
                ]
            }));
    });

    let pipeline_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/pipeline/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "objects": [{
                    "uuid": "b7a79fff-1a26-4d9a-9e1c-0a232e6b221a",
                    "resource_uri": "/api/v2/pipeline/b7a79fff-1a26-4d9a-9e1c-0a232e6b221a/"
                }]
            }));
    });

    let space_list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/space/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "objects": [
                    {"access_protocol": "FS", "resource_uri": "/api/v2/space/0cfc2dd7/"}
                ]
            }));
    });

    let location_create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/location/")
            .header("Authorization", "ApiKey test:test")
            .json_body(serde_json::json!({
                "pipeline": ["/api/v2/pipeline/b7a79fff-1a26-4d9a-9e1c-0a232e6b221a/"],
                "purpose": "TS",
                "relative_path": "home/interactive",
                "description": "interactive workflow",
                "space": "/api/v2/space/0cfc2dd7/"
            }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"uuid": "9d014d1e"}));
    });

    let client = StorageServiceClient::new(config.api_context());
    let provisioner = Provisioner::new_with_pipeline(client, config.pipeline_uuid.clone());
    let report = provisioner.run(&config.resource_specs()).await?;

    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].label, "Location for automated workflow");
    assert_eq!(report.entries[0].outcome, EnsureOutcome::AlreadyExists);
    assert_eq!(report.entries[1].label, "Location for interactive workflow");
    assert_eq!(report.entries[1].outcome, EnsureOutcome::Created);
    assert_eq!(
        report.lines(),
        vec![
            "Location for automated workflow already exists.",
            "Location for interactive workflow created.",
        ]
    );

    // interactive 只建立一次,references 也只為它解析
    location_create_mock.assert();
    pipeline_mock.assert();
    space_list_mock.assert();
    location_list_mock.assert_hits(2);

    Ok(())
}

#[tokio::test]
async fn test_fully_provisioned_service_reports_already_exists() -> Result<()> {
    let server = MockServer::start();
    let config =
        TransferCliConfig::try_parse_from(["transfer-locations", "--base-url", server.base_url().as_str()])
            .unwrap();

    let location_list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v2/location/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "objects": [
                    {"path": "/home/automated", "resource_uri": "/api/v2/location/5f61fe88/"},
                    {"path": "/home/interactive", "resource_uri": "/api/v2/location/9d014d1e/"}
                ]
            }));
    });

    let location_create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v2/location/");
        then.status(201);
    });

    let client = StorageServiceClient::new(config.api_context());
    let provisioner = Provisioner::new(client);
    let report = provisioner.run(&config.resource_specs()).await?;

    assert!(report
        .entries
        .iter()
        .all(|e| e.outcome == EnsureOutcome::AlreadyExists));
    assert_eq!(report.created(), 0);

    // 全部已存在:不應該有任何 POST,也不需要 pipeline/space 查詢
    location_create_mock.assert_hits(0);
    location_list_mock.assert_hits(2);

    Ok(())
}
