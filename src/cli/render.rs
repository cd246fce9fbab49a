//! Text renderers for stackup reports
//!
//! Both views consume the same [`StackupReport`]; the calculator never knows
//! which one is drawing it.

use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{format_bound, format_fixed, format_length};
use crate::cli::viz;
use crate::core::config::{Config, Precision, View};
use crate::entities::stackup::StackupReport;

/// Turns a report into terminal text
pub trait Renderer {
    fn render(&self, report: &StackupReport, title: Option<&str>) -> String;
}

/// Results plus the tolerance breakdown chart
#[derive(Debug, Clone)]
pub struct SimpleRenderer {
    pub precision: Precision,
    pub chart_width: usize,
}

/// Everything in the simple view plus the feature table, braille profile and
/// worst-case/RSS range bands
#[derive(Debug, Clone)]
pub struct EnhancedRenderer {
    pub precision: Precision,
    pub chart_width: usize,
}

/// Pick the renderer for a view
pub fn renderer_for(view: View, config: &Config) -> Box<dyn Renderer> {
    match view {
        View::Simple => Box::new(SimpleRenderer {
            precision: config.precision,
            chart_width: config.chart_width,
        }),
        View::Enhanced => Box::new(EnhancedRenderer {
            precision: config.precision,
            chart_width: config.chart_width,
        }),
    }
}

fn heading(text: &str) -> String {
    style(text).bold().to_string()
}

fn title_block(title: Option<&str>, out: &mut Vec<String>) {
    if let Some(title) = title {
        out.push(style(title).yellow().bold().to_string());
        out.push(style("─".repeat(60)).dim().to_string());
    }
}

fn results_block(report: &StackupReport, precision: &Precision, out: &mut Vec<String>) {
    let result = &report.result;
    out.push(heading("Results"));
    out.push(format!(
        "  {}: {}",
        style("Total Nominal Length").bold(),
        style(format_length(result.total_length, precision.total_length)).cyan()
    ));
    out.push(format!(
        "  {}: {}",
        style("Worst-Case Stack-Up").bold(),
        style(format_bound(result.worst_case, precision.worst_case)).cyan()
    ));
    out.push(format!(
        "  {}: {}",
        style("RSS Stack-Up").bold(),
        style(format_bound(result.rss, precision.rss)).cyan()
    ));
}

fn breakdown_block(
    report: &StackupReport,
    precision: &Precision,
    width: usize,
    out: &mut Vec<String>,
) {
    out.push(String::new());
    out.push(heading("Tolerance Breakdown"));
    out.push(viz::render_breakdown(&report.breakdown, width, precision.rss));
}

impl Renderer for SimpleRenderer {
    fn render(&self, report: &StackupReport, title: Option<&str>) -> String {
        let mut out = Vec::new();
        title_block(title, &mut out);
        results_block(report, &self.precision, &mut out);
        breakdown_block(report, &self.precision, self.chart_width, &mut out);
        out.join("\n")
    }
}

#[derive(Tabled)]
struct FeatureRow {
    #[tabled(rename = "Feature")]
    feature: String,
    #[tabled(rename = "Length (mm)")]
    length: String,
    #[tabled(rename = "Tolerance (± mm)")]
    tolerance: String,
}

impl EnhancedRenderer {
    fn feature_table(&self, report: &StackupReport) -> String {
        let rows = report
            .breakdown
            .iter()
            .zip(&report.features)
            .map(|(bar, entry)| FeatureRow {
                feature: format!("Feature {}", bar.label),
                length: format_fixed(entry.length, self.precision.total_length),
                tolerance: format_fixed(entry.tolerance, self.precision.rss),
            });

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.to_string()
    }
}

impl Renderer for EnhancedRenderer {
    fn render(&self, report: &StackupReport, title: Option<&str>) -> String {
        let mut out = Vec::new();
        title_block(title, &mut out);
        results_block(report, &self.precision, &mut out);

        if !report.features.is_empty() {
            out.push(String::new());
            out.push(heading("Features"));
            out.push(self.feature_table(report));
        }

        breakdown_block(report, &self.precision, self.chart_width, &mut out);

        if let Some(profile) = viz::render_tolerance_profile(&report.breakdown, viz::PROFILE_HEIGHT)
        {
            out.push(String::new());
            out.push(profile);
        }

        out.push(String::new());
        out.push(heading("Range Bands"));
        out.push(format!(
            "  Nominal: {}",
            format_length(report.result.total_length, self.precision.total_length)
        ));
        out.push(viz::render_range_bands(
            report.result.total_length,
            &[
                (
                    "Worst-Case",
                    report.worst_case_band,
                    self.precision.worst_case,
                ),
                ("RSS", report.rss_band, self.precision.rss),
            ],
            self.chart_width.saturating_add(1),
        ));

        out.join("\n")
    }
}
