//! Fixture-driven validation suite
//!
//! Uses libtest-mimic to generate one test per entry in
//! `tests/data/manifest.json`. Each test loads a resource document, validates
//! it in the listed mode and compares the diagnostics in order.
//!
//! ```bash
//! cargo test -p ferrum-r5-models --test fixture_suite
//!
//! # Filter by name
//! cargo test -p ferrum-r5-models --test fixture_suite -- appointment
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use ferrum_r5_models::{Resource, ValidationMode, Validator, ValidatorConfig};
use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    test_cases: Vec<TestCase>,
}

#[derive(Debug, Clone, Deserialize)]
struct TestCase {
    name: String,
    file: String,
    /// Resource kind to deserialize into instead of the document's own tag
    #[serde(rename = "as")]
    as_type: Option<String>,
    mode: ValidationMode,
    errors: Vec<String>,
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn load_manifest() -> Result<Manifest, String> {
    let path = data_dir().join("manifest.json");
    let raw = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("{}: {e}", path.display()))
}

fn load_resource(tc: &TestCase) -> Result<Resource, Failed> {
    let path = data_dir().join(&tc.file);
    let raw = fs::read_to_string(&path)
        .map_err(|e| Failed::from(format!("could not read {}: {e}", path.display())))?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| Failed::from(format!("invalid JSON in {}: {e}", tc.file)))?;

    let resource = match &tc.as_type {
        Some(kind) => Resource::from_value_as(kind, value),
        None => Resource::from_value(value),
    };
    resource.map_err(|e| Failed::from(format!("could not load {}: {e}", tc.file)))
}

fn run_case(tc: &TestCase) -> Result<(), Failed> {
    let resource = load_resource(tc)?;

    let config = ValidatorConfig::builder().mode(tc.mode).build();
    let validator =
        Validator::from_config(&config).map_err(|e| Failed::from(format!("bad config: {e}")))?;
    let outcome = validator.validate_resource(&resource);

    let actual: Vec<&str> = outcome.issues.iter().map(|i| i.diagnostics.as_str()).collect();
    if actual == tc.errors {
        return Ok(());
    }

    let mut msg = format!(
        "diagnostics mismatch: expected {} issue(s), got {}",
        tc.errors.len(),
        actual.len()
    );
    for (i, d) in tc.errors.iter().enumerate() {
        msg.push_str(&format!("\n  expected [{i}] {d}"));
    }
    for (i, issue) in outcome.issues.iter().enumerate() {
        msg.push_str(&format!(
            "\n  actual   [{i}] {} @ {}",
            issue.diagnostics,
            issue.location.as_deref().unwrap_or("-"),
        ));
    }
    Err(msg.into())
}

fn main() {
    let args = Arguments::from_args();

    let manifest = match load_manifest() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("could not load fixture manifest: {e}");
            std::process::exit(1);
        }
    };

    let trials: Vec<Trial> = manifest
        .test_cases
        .into_iter()
        .map(|tc| {
            let name = tc.name.clone();
            Trial::test(name, move || run_case(&tc))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}
