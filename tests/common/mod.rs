#![allow(dead_code)]
//! Shared test utilities for integration tests.
//!
//! - `write_manifest`: write a JSON artifact manifest into a temp dir
//! - `ear_project`: the artifact set of a small EAR project

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

/// Artifacts of a typical EAR project: one jar with sources and tests,
/// a web module, an EJB with its client jar and a third-party library.
pub fn ear_project() -> Value {
    json!({
        "artifacts": [
            "com.x:core:jar:1.0",
            "com.x:core:jar:sources:1.0",
            "com.x:core:jar:tests:1.0",
            "com.x:beans:ejb:1.0",
            "com.x:beans:jar:client:1.0",
            {
                "group_id": "com.x",
                "artifact_id": "web",
                "type": "war",
                "version": "1.0",
                "file": "lib/web-1.0.war"
            },
            "org.lib:util:jar:2.3"
        ]
    })
}

pub fn write_manifest(temp_dir: &TempDir, manifest: &Value) -> PathBuf {
    let path = temp_dir.path().join("earpack.json");
    fs::write(&path, serde_json::to_string_pretty(manifest).unwrap()).expect("write manifest");
    path
}
