//! Output formatting for reports

use console::Term;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::render::renderer_for;
use crate::cli::OutputFormat;
use crate::core::config::{Config, View};
use crate::entities::stackup::{StackupReport, UNITS};

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_terminal: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_terminal {
                OutputFormat::Text
            } else {
                OutputFormat::Json
            }
        }
        other => other,
    }
}

/// Serialized form of a report, with its title and unit
#[derive(Serialize)]
struct ReportDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    units: &'static str,
    #[serde(flatten)]
    report: &'a StackupReport,
}

/// Render a report in the requested format
pub fn format_report(
    report: &StackupReport,
    title: Option<&str>,
    format: OutputFormat,
    view: View,
    config: &Config,
) -> Result<String> {
    let document = ReportDocument {
        title,
        units: UNITS,
        report,
    };

    match effective_format(format, Term::stdout().is_term()) {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&document).into_diagnostic()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yml::to_string(&document).into_diagnostic(),
        OutputFormat::Csv => features_csv(report),
        OutputFormat::Text | OutputFormat::Auto => {
            let mut text = renderer_for(view, config).render(report, title);
            text.push('\n');
            Ok(text)
        }
    }
}

/// One CSV row per feature: position, length, tolerance
fn features_csv(report: &StackupReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["feature", "length", "tolerance"])
        .into_diagnostic()?;
    for (bar, entry) in report.breakdown.iter().zip(&report.features) {
        wtr.write_record([
            bar.label.to_string(),
            entry.length.to_string(),
            entry.tolerance.to_string(),
        ])
        .into_diagnostic()?;
    }
    let bytes = wtr.into_inner().into_diagnostic()?;
    String::from_utf8(bytes).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::stackup::{report, FeatureEntry};

    fn sample() -> StackupReport {
        report(&[
            FeatureEntry::new(10.0, 0.1),
            FeatureEntry::new(20.0, 0.2),
            FeatureEntry::new(15.0, 0.05),
        ])
    }

    #[test]
    fn test_effective_format_auto() {
        assert_eq!(effective_format(OutputFormat::Auto, true), OutputFormat::Text);
        assert_eq!(effective_format(OutputFormat::Auto, false), OutputFormat::Json);
        assert_eq!(effective_format(OutputFormat::Csv, true), OutputFormat::Csv);
    }

    #[test]
    fn test_json_document_has_units_and_title() {
        let out = format_report(
            &sample(),
            Some("Gap"),
            OutputFormat::Json,
            View::Simple,
            &Config::default(),
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["title"], "Gap");
        assert_eq!(json["units"], "mm");
        assert_eq!(json["features"].as_array().unwrap().len(), 3);
        assert!(json["result"]["rss"].as_f64().unwrap() > 0.229);
    }

    #[test]
    fn test_yaml_document_omits_missing_title() {
        let out = format_report(
            &sample(),
            None,
            OutputFormat::Yaml,
            View::Simple,
            &Config::default(),
        )
        .unwrap();

        assert!(!out.contains("title"));
        assert!(out.contains("units: mm"));
        assert!(out.contains("worst_case_band"));
    }

    #[test]
    fn test_csv_rows_per_feature() {
        let out = format_report(
            &sample(),
            None,
            OutputFormat::Csv,
            View::Simple,
            &Config::default(),
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "feature,length,tolerance");
        assert_eq!(lines[1], "1,10,0.1");
        assert_eq!(lines[3], "3,15,0.05");
        assert_eq!(lines.len(), 4);
    }
}
