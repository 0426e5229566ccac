//! Inspect command - summarise the checks of a session result

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use serde_json::Value;

use doc_scan_checks::models::{CheckKind, SessionCheck, SessionChecks};
use doc_scan_checks::output::{CheckSummary, InspectResult, OutputMode};

/// Read a JSON document and render a summary of its checks
pub fn inspect(file: &str, kind: Option<&str>, output_mode: OutputMode) -> anyhow::Result<()> {
    let kind = kind.map(str::parse::<CheckKind>).transpose().map_err(anyhow::Error::msg)?;

    let content = read_input(file)?;
    let document: Value =
        serde_json::from_str(&content).with_context(|| format!("failed to parse JSON in {file}"))?;

    let checks = collect_checks(&document);
    log::debug!("mapped {} check(s) from {file}", checks.len());

    for check in checks.iter().filter(|c| c.kind().is_none()) {
        let response = check.response();
        log::debug!(
            "check {} has no dedicated model for type {}",
            response.id().unwrap_or("-"),
            response.check_type().unwrap_or("(none)")
        );
    }

    let result = InspectResult {
        source: display_name(file).to_string(),
        kind: kind.map(|k| k.to_string()),
        checks: checks
            .iter()
            .filter(|check| kind.is_none_or(|k| check.kind() == Some(k)))
            .map(CheckSummary::from)
            .collect(),
    };

    result.render(output_mode);
    Ok(())
}

/// Session result, check array, or a single check object
fn collect_checks(document: &Value) -> SessionChecks {
    match document {
        Value::Object(obj) if !obj.contains_key("checks") => {
            std::iter::once(SessionCheck::new(Some(document))).collect()
        },
        other => SessionChecks::new(Some(other)),
    }
}

fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).context("failed to read stdin")?;
        return Ok(content);
    }

    fs::read_to_string(file).with_context(|| format!("failed to read {file}"))
}

fn display_name(file: &str) -> &str {
    if file == "-" { "stdin" } else { file }
}
