use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use ferrum_r5_models::document::{from_store_document, to_store_document};
use ferrum_r5_models::{
    Resource, ValidationMode, ValidationOutcome, Validator, ValidatorConfig,
    RESOURCE_TYPES,
};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Resource documents to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Gather every violation instead of stopping at the first
    #[arg(long)]
    pub exhaustive: bool,

    /// Stop collecting after this many issues per resource
    #[arg(long)]
    pub max_issues: Option<usize>,

    /// YAML validator configuration; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read every document as this resource type instead of its own tag
    #[arg(long = "as", value_name = "RESOURCE_TYPE")]
    pub as_type: Option<String>,

    /// Also validate the resources inside Bundle entries
    #[arg(long)]
    pub bundle_entries: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, clap::Args)]
pub struct StoreArgs {
    /// Resource document to convert
    pub file: PathBuf,

    /// Convert a store document back into wire form
    #[arg(long)]
    pub reverse: bool,
}

/// Result of one validated document (or bundle entry).
#[derive(Debug)]
pub struct FileReport {
    pub label: String,
    pub result: Result<ValidationOutcome, String>,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        matches!(&self.result, Ok(outcome) if outcome.valid)
    }
}

pub fn build_config(args: &ValidateArgs) -> anyhow::Result<ValidatorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            ValidatorConfig::from_yaml(&raw)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => ValidatorConfig::default(),
    };

    if args.exhaustive {
        config.mode = ValidationMode::Exhaustive;
    }
    if let Some(max_issues) = args.max_issues {
        config.max_issues = max_issues;
    }
    Ok(config)
}

pub fn validate(args: &ValidateArgs) -> anyhow::Result<bool> {
    let config = build_config(args)?;
    let validator = Validator::from_config(&config).context("Invalid validator configuration")?;
    tracing::debug!(mode = ?config.mode, max_issues = config.max_issues, "Validator ready");

    let mut reports = Vec::new();
    for path in &args.files {
        validate_file(&validator, path, args, &mut reports);
    }

    let output = match args.format {
        OutputFormat::Text => render_text(&reports),
        OutputFormat::Json => serde_json::to_string_pretty(&render_json(&reports))?,
    };
    println!("{output}");

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    tracing::info!(files = args.files.len(), reports = reports.len(), invalid, "Validation finished");
    Ok(invalid == 0)
}

fn validate_file(
    validator: &Validator,
    path: &Path,
    args: &ValidateArgs,
    reports: &mut Vec<FileReport>,
) {
    let label = path.display().to_string();
    let resource = match load_resource(path, args.as_type.as_deref()) {
        Ok(resource) => resource,
        Err(e) => {
            tracing::warn!(file = %label, error = %e, "Could not load resource");
            reports.push(FileReport {
                label,
                result: Err(format!("{e:#}")),
            });
            return;
        }
    };

    let outcome = validator.validate_resource(&resource);
    reports.push(FileReport {
        label: label.clone(),
        result: Ok(outcome),
    });

    if let (true, Resource::Bundle(bundle)) = (args.bundle_entries, &resource) {
        for (idx, value) in bundle.resources() {
            let entry_label = format!("{label}#entry[{idx}]");
            let result = Resource::from_value(value.clone())
                .map(|entry| validator.validate_resource(&entry))
                .map_err(|e| e.to_string());
            reports.push(FileReport {
                label: entry_label,
                result,
            });
        }
    }
}

fn load_resource(path: &Path, as_type: Option<&str>) -> anyhow::Result<Resource> {
    let value = read_json(path)?;
    let resource = match as_type {
        Some(kind) => Resource::from_value_as(kind, value)?,
        None => Resource::from_value(value)?,
    };
    Ok(resource)
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = Vec::new();
    for report in reports {
        match &report.result {
            Err(e) => out.push(format!("{}: ERROR {}", report.label, e)),
            Ok(outcome) if outcome.valid => out.push(format!(
                "{}: OK ({})",
                report.label,
                outcome.resource_type.as_deref().unwrap_or("-")
            )),
            Ok(outcome) => {
                out.push(format!(
                    "{}: INVALID ({}) {} issue(s)",
                    report.label,
                    outcome.resource_type.as_deref().unwrap_or("-"),
                    outcome.error_count()
                ));
                for issue in &outcome.issues {
                    out.push(format!(
                        "  - [{}] {} @ {}",
                        issue.code,
                        issue.diagnostics,
                        issue.location.as_deref().unwrap_or("-")
                    ));
                }
            }
        }
    }
    out.join("\n")
}

pub fn render_json(reports: &[FileReport]) -> Value {
    Value::Array(
        reports
            .iter()
            .map(|report| match &report.result {
                Ok(outcome) => json!({
                    "file": report.label,
                    "resourceType": outcome.resource_type,
                    "valid": outcome.valid,
                    "outcome": outcome.to_operation_outcome(),
                }),
                Err(e) => json!({
                    "file": report.label,
                    "valid": false,
                    "error": e,
                }),
            })
            .collect(),
    )
}

pub fn store(args: &StoreArgs) -> anyhow::Result<()> {
    let value = read_json(&args.file)?;

    let output = if args.reverse {
        let resource: Resource = from_store_document(value)
            .with_context(|| format!("Invalid store document {}", args.file.display()))?;
        tracing::debug!(resource_type = resource.resource_type(), "Converted to wire form");
        resource.to_value()?
    } else {
        let resource = Resource::from_value(value)
            .with_context(|| format!("Invalid resource {}", args.file.display()))?;
        tracing::debug!(resource_type = resource.resource_type(), "Converted to store form");
        to_store_document(&resource)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn resource_types() {
    for resource_type in RESOURCE_TYPES {
        println!("{resource_type}");
    }
}
