// src/cli/export.rs — Summary export
//
// Writes the derived summary (ranked tally, unique winners and years) as
// JSON or YAML.

use crate::core::DashboardContext;
use crate::infra::config::Config;

/// Render the summary of `ctx` in `format`.
pub fn render_summary(ctx: &DashboardContext, format: &str) -> anyhow::Result<String> {
    let mut data = serde_json::to_value(ctx.summary())?;
    if let Some(obj) = data.as_object_mut() {
        obj.insert(
            "exported_at".into(),
            serde_json::json!(chrono::Utc::now().to_rfc3339()),
        );
        obj.insert(
            "version".into(),
            serde_json::json!(env!("CARGO_PKG_VERSION")),
        );
    }

    let output = match format {
        "json" => serde_json::to_string_pretty(&data)?,
        "yaml" | "yml" => serde_yml::to_string(&data)?,
        other => {
            anyhow::bail!("Unsupported format '{}'. Options: json, yaml", other);
        }
    };
    Ok(output)
}

/// Export the summary of the configured dataset.
pub fn run_export(config: &Config, format: &str, output: Option<&str>) -> anyhow::Result<()> {
    let ctx = DashboardContext::load(&config.data)?;
    let rendered = render_summary(&ctx, format)?;

    if let Some(path) = output {
        std::fs::write(path, &rendered)?;
        println!("Exported summary of {} records to {}", ctx.records().len(), path);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, RecordSet};

    fn ctx() -> DashboardContext {
        let set: RecordSet = vec![
            Record {
                year: 1978,
                winner: "Argentina".into(),
                runner_up: "Netherlands".into(),
            },
            Record {
                year: 1986,
                winner: "Argentina".into(),
                runner_up: "West Germany".into(),
            },
        ]
        .into_iter()
        .collect();
        DashboardContext::new(set)
    }

    #[test]
    fn test_json_export() {
        let out = render_summary(&ctx(), "json").unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["records"], 2);
        assert_eq!(v["tally"][0]["name"], "Argentina");
        assert_eq!(v["tally"][0]["wins"], 2);
        assert_eq!(v["years"], serde_json::json!([1978, 1986]));
        assert!(v["exported_at"].is_string());
    }

    #[test]
    fn test_yaml_export() {
        let out = render_summary(&ctx(), "yaml").unwrap();
        assert!(out.contains("Argentina"));
        assert!(out.contains("records: 2"));
    }

    #[test]
    fn test_unknown_format() {
        let err = render_summary(&ctx(), "xml").unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }
}
