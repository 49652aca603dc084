//! Integration tests for workflow file conversion
//!
//! These tests run the full read → convert → write pipeline against real
//! files in a temporary directory.

use eyre::Result;
use n8n_workflow_converter::cli::convert_workflow_file;
use n8n_workflow_converter::etl::{Extractor, Pipeline, Transformer};
use n8n_workflow_converter::n8n::{N8nRef, SyncPolicy};
use n8n_workflow_converter::storage::{ManifestTarget, ManifestWriter, WorkflowFileReader};
use n8n_workflow_converter::transform::{ConvertOptions, WorkflowConverter};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A realistic n8n export with the usual editor metadata around it
fn sample_export() -> Value {
    json!({
        "name": "Daily Slack Digest",
        "nodes": [
            {
                "parameters": {"rule": {"interval": [{"field": "days"}]}},
                "id": "2f1c9a6e-0000-4000-8000-000000000001",
                "name": "Every Day",
                "type": "n8n-nodes-base.scheduleTrigger",
                "typeVersion": 1.2,
                "position": [0, 0]
            },
            {
                "parameters": {"channel": "#général", "text": "Résumé du jour"},
                "id": "2f1c9a6e-0000-4000-8000-000000000002",
                "name": "Post",
                "type": "n8n-nodes-base.slack",
                "typeVersion": 2.2,
                "position": [220, 0]
            }
        ],
        "connections": {
            "Every Day": {"main": [[{"node": "Post", "type": "main", "index": 0}]]}
        },
        "settings": {"executionOrder": "v1", "availableInMCP": false},
        "staticData": null,
        "pinData": {},
        "active": false,
        "id": "Xk2pQ9",
        "versionId": "7d5e0c1a",
        "meta": {"instanceId": "abc123"},
        "tags": []
    })
}

fn write_export(dir: &Path, value: &Value) -> Result<PathBuf> {
    let path = dir.join("workflow.json");
    std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

fn convert_to_string(input: &Path, options: ConvertOptions, dir: &Path) -> Result<String> {
    let output = dir.join("out/workflow.yaml");
    convert_workflow_file(input, options, ManifestTarget::File(output.clone()))?;
    Ok(std::fs::read_to_string(output)?)
}

#[test]
fn test_convert_sample_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_export(temp_dir.path(), &sample_export())?;

    let yaml = convert_to_string(&input, ConvertOptions::default(), temp_dir.path())?;

    assert!(yaml.starts_with("---\napiVersion: n8n.slys.dev/v1alpha1\nkind: N8nWorkflow\n"));
    assert!(yaml.contains("metadata:\n  name: daily-slack-digest\n  namespace: n8n\n"));
    assert!(yaml.contains("spec:\n  active: true\n  workflow:\n    name: Daily Slack Digest\n"));

    // Unicode is written as-is
    assert!(yaml.contains("Résumé du jour"));

    let parsed: Value = serde_yaml::from_str(&yaml)?;
    let workflow = &parsed["spec"]["workflow"];
    assert_eq!(workflow["nodes"], sample_export()["nodes"]);
    assert_eq!(workflow["connections"], sample_export()["connections"]);
    assert_eq!(workflow["settings"], json!({"executionOrder": "v1"}));
    assert!(workflow.get("staticData").is_none());
    assert!(workflow.get("pinData").is_none());
    assert!(workflow.get("id").is_none());
    assert!(workflow.get("tags").is_none());

    Ok(())
}

#[test]
fn test_field_order_is_fixed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_export(
        temp_dir.path(),
        &json!({
            "pinData": {"Post": [{"json": {"ok": true}}]},
            "staticData": {"lastRun": 1},
            "settings": {"timezone": "UTC"},
            "connections": {},
            "nodes": [],
            "name": "Ordered"
        }),
    )?;

    let yaml = convert_to_string(&input, ConvertOptions::default(), temp_dir.path())?;

    let keys = [
        "apiVersion:",
        "kind:",
        "metadata:",
        "spec:",
        "  active:",
        "  workflow:",
        "    name:",
        "    nodes:",
        "    connections:",
        "    settings:",
        "    staticData:",
        "    pinData:",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| yaml.find(&format!("\n{}", key)).expect(key))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", yaml);

    Ok(())
}

#[test]
fn test_inactive_custom_namespace() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_export(temp_dir.path(), &json!({"name": "Test"}))?;

    let options = ConvertOptions {
        namespace: "ops".to_string(),
        active: false,
        ..Default::default()
    };
    let yaml = convert_to_string(&input, options, temp_dir.path())?;

    let parsed: Value = serde_yaml::from_str(&yaml)?;
    assert_eq!(parsed["metadata"], json!({"name": "test", "namespace": "ops"}));
    assert_eq!(parsed["spec"]["active"], json!(false));
    assert_eq!(parsed["spec"]["workflow"], json!({"name": "Test"}));

    Ok(())
}

#[test]
fn test_sync_policy_and_reference() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_export(temp_dir.path(), &json!({"name": "Test"}))?;

    let options = ConvertOptions {
        sync_policy: Some(SyncPolicy::CreateOnly),
        n8n_ref: Some(N8nRef {
            url: Some("http://n8n.n8n.svc:5678".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let yaml = convert_to_string(&input, options, temp_dir.path())?;

    assert!(yaml.contains("  syncPolicy: CreateOnly\n"));
    assert!(yaml.contains("  n8nRef:\n    url: http://n8n.n8n.svc:5678\n"));

    Ok(())
}

#[test]
fn test_missing_input_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("workflow.yaml");

    let result = convert_workflow_file(
        temp_dir.path().join("missing.json"),
        ConvertOptions::default(),
        ManifestTarget::File(output.clone()),
    );

    assert!(result.is_err());
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_invalid_json_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("workflow.json");
    std::fs::write(&input, "not json at all")?;
    let output = temp_dir.path().join("workflow.yaml");

    let err = convert_workflow_file(
        &input,
        ConvertOptions::default(),
        ManifestTarget::File(output.clone()),
    )
    .unwrap_err();

    assert!(format!("{:?}", err).contains("Failed to parse workflow JSON"));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_pipeline_with_library_types() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_export(temp_dir.path(), &json!({}))?;
    let output = temp_dir.path().join("unnamed.yaml");

    let reader = WorkflowFileReader::new(&input);
    let converter = WorkflowConverter::new("staging", true);

    // Stages can be driven by hand as well as through a pipeline
    let resources = converter.transform_many(reader.extract()?)?;
    assert_eq!(resources[0].metadata.name, "unnamed-workflow");

    let pipeline = Pipeline::new(reader, converter, ManifestWriter::file(&output));
    assert_eq!(pipeline.run()?, 1);

    let yaml = std::fs::read_to_string(&output)?;
    assert!(yaml.contains("name: unnamed-workflow\n  namespace: staging\n"));

    Ok(())
}
