//! Terminal visualization for stackup results
//!
//! Horizontal bar charts and range bands use box-drawing characters; the
//! tolerance profile uses braille graphics via drawille.

use console::style;
use drawille::Canvas;

use crate::cli::helpers::format_fixed;
use crate::entities::stackup::{FeatureBar, RangeBand};

/// Default height in pixels of the braille tolerance profile
pub const PROFILE_HEIGHT: u32 = 16;

/// Pixel columns per feature in the braille profile
const PROFILE_COLUMN: u32 = 4;

fn feature_label(label: usize) -> String {
    format!("Feature {}", label)
}

/// Render the per-feature tolerance breakdown as horizontal bars
///
/// Bars are scaled to the largest tolerance magnitude. Negative tolerances
/// (only possible with the `accept` policy) are drawn with a hatched fill.
///
/// # Example Output
/// ```text
///   Feature 1 │██████████          │ 0.100
///   Feature 2 │████████████████████│ 0.200
///   Feature 3 │█████               │ 0.050
/// ```
pub fn render_breakdown(bars: &[FeatureBar], width: usize, places: usize) -> String {
    if bars.is_empty() {
        return "  (no features)".to_string();
    }

    let max = bars.iter().map(|b| b.tolerance.abs()).fold(0.0, f64::max);
    let label_width = bars
        .iter()
        .map(|b| feature_label(b.label).len())
        .max()
        .unwrap_or(0);

    bars.iter()
        .map(|bar| {
            let len = if max > 0.0 {
                ((bar.tolerance.abs() / max) * width as f64).round() as usize
            } else {
                0
            };
            let len = len.min(width);

            let fill = if bar.tolerance < 0.0 {
                style("░".repeat(len)).red()
            } else {
                style("█".repeat(len)).green()
            };

            format!(
                "  {:<lw$} │{}{}│ {}",
                feature_label(bar.label),
                fill,
                " ".repeat(width - len),
                format_fixed(bar.tolerance, places),
                lw = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the tolerance profile as a braille column chart
///
/// Returns `None` when there is nothing to draw (no features, or all
/// tolerances zero).
pub fn render_tolerance_profile(bars: &[FeatureBar], height: u32) -> Option<String> {
    let max = bars.iter().map(|b| b.tolerance.abs()).fold(0.0, f64::max);
    if bars.is_empty() || max <= 0.0 || height < 2 {
        return None;
    }

    let width = bars.len() as u32 * PROFILE_COLUMN;
    let mut canvas = Canvas::new(width, height);
    let bottom = height - 1;

    for (i, bar) in bars.iter().enumerate() {
        let column_height = ((bar.tolerance.abs() / max) * bottom as f64).round() as u32;
        let x0 = i as u32 * PROFILE_COLUMN;
        // Leave one pixel column of gap between features
        for x in x0..x0 + PROFILE_COLUMN - 1 {
            for y in (bottom - column_height)..=bottom {
                canvas.set(x, y);
            }
        }
    }

    Some(canvas.frame())
}

/// Render range bands on a shared horizontal scale centered on the nominal total
///
/// Widths under three columns leave no room for a bar, so only the bounds
/// are printed.
///
/// # Example Output
/// ```text
///   Worst-Case │─────[════════┼════════]─────│ 44.65 .. 45.35
///   RSS        │──────────[═══┼═══]──────────│ 44.771 .. 45.229
/// ```
pub fn render_range_bands(
    total_length: f64,
    bands: &[(&str, RangeBand, usize)],
    width: usize,
) -> String {
    if bands.is_empty() {
        return String::new();
    }

    let name_width = bands.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);

    if width < 3 {
        return bands
            .iter()
            .map(|(name, band, places)| {
                format!(
                    "  {:<nw$} {} .. {}",
                    name,
                    format_fixed(band.low, *places),
                    format_fixed(band.high, *places),
                    nw = name_width
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let view_min = bands
        .iter()
        .map(|(_, b, _)| b.low.min(b.high))
        .fold(total_length, f64::min);
    let view_max = bands
        .iter()
        .map(|(_, b, _)| b.low.max(b.high))
        .fold(total_length, f64::max);

    // 10% margin either side so band ends don't touch the frame
    let span = view_max - view_min;
    let margin = span * 0.1;
    let view_min = view_min - margin;
    let view_range = span + 2.0 * margin;

    let last = width - 1;
    let position = |value: f64| -> usize {
        if view_range > 0.0 && view_range.is_finite() {
            (((value - view_min) / view_range) * last as f64)
                .round()
                .clamp(0.0, last as f64) as usize
        } else {
            last / 2
        }
    };

    let center = position(total_length);

    bands
        .iter()
        .map(|(name, band, places)| {
            let lo = position(band.low.min(band.high));
            let hi = position(band.low.max(band.high));

            let mut bar: Vec<char> = vec!['─'; width];
            for cell in bar.iter_mut().take(hi + 1).skip(lo) {
                *cell = '═';
            }
            if lo < hi {
                bar[lo] = '[';
                bar[hi] = ']';
            }
            bar[center] = '┼';

            let bar_str: String = bar.into_iter().collect();
            format!(
                "  {:<nw$} │{}│ {} .. {}",
                name,
                style(bar_str).cyan(),
                format_fixed(band.low, *places),
                format_fixed(band.high, *places),
                nw = name_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::stackup::{compute, per_feature_series, range_band, FeatureEntry};

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    fn scenario() -> Vec<FeatureEntry> {
        vec![
            FeatureEntry::new(10.0, 0.1),
            FeatureEntry::new(20.0, 0.2),
            FeatureEntry::new(15.0, 0.05),
        ]
    }

    #[test]
    fn test_render_breakdown_scales_to_largest() {
        let output = plain(&render_breakdown(&per_feature_series(&scenario()), 20, 3));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('█').count(), 10);
        assert_eq!(lines[1].matches('█').count(), 20);
        assert_eq!(lines[2].matches('█').count(), 5);
        assert!(lines[0].starts_with("  Feature 1 │"));
        assert!(lines[2].ends_with("│ 0.050"));
    }

    #[test]
    fn test_render_breakdown_all_zero() {
        let bars = per_feature_series(&[FeatureEntry::new(5.0, 0.0)]);
        let output = plain(&render_breakdown(&bars, 10, 3));

        assert!(!output.contains('█'));
        assert!(output.ends_with("│ 0.000"));
    }

    #[test]
    fn test_render_breakdown_negative_is_hatched() {
        let bars = per_feature_series(&[FeatureEntry::new(1.0, 0.2), FeatureEntry::new(1.0, -0.1)]);
        let output = plain(&render_breakdown(&bars, 10, 2));

        assert!(output.lines().nth(1).unwrap().contains("░░░░░"));
        assert!(output.contains("-0.10"));
    }

    #[test]
    fn test_render_breakdown_aligns_two_digit_labels() {
        let entries: Vec<FeatureEntry> = (0..12).map(|_| FeatureEntry::new(1.0, 0.1)).collect();
        let output = plain(&render_breakdown(&per_feature_series(&entries), 8, 2));

        assert!(output.contains("  Feature 1  │"));
        assert!(output.contains("  Feature 12 │"));
    }

    #[test]
    fn test_render_breakdown_empty() {
        assert!(render_breakdown(&[], 20, 3).contains("no features"));
    }

    #[test]
    fn test_render_tolerance_profile_uses_braille() {
        let output = render_tolerance_profile(&per_feature_series(&scenario()), PROFILE_HEIGHT)
            .expect("profile should render");
        assert!(output
            .chars()
            .any(|c| c as u32 >= 0x2800 && c as u32 <= 0x28FF));
    }

    #[test]
    fn test_render_tolerance_profile_nothing_to_draw() {
        assert!(render_tolerance_profile(&[], PROFILE_HEIGHT).is_none());
        let zeros = per_feature_series(&[FeatureEntry::new(5.0, 0.0)]);
        assert!(render_tolerance_profile(&zeros, PROFILE_HEIGHT).is_none());
    }

    #[test]
    fn test_render_range_bands() {
        let result = compute(&scenario());
        let bands = [
            (
                "Worst-Case",
                range_band(result.total_length, result.worst_case),
                2,
            ),
            ("RSS", range_band(result.total_length, result.rss), 3),
        ];
        let output = plain(&render_range_bands(result.total_length, &bands, 41));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("44.65 .. 45.35"));
        assert!(lines[1].ends_with("44.771 .. 45.229"));
        assert!(lines[0].starts_with("  Worst-Case │"));
        assert!(lines[1].starts_with("  RSS        │"));
        // RSS band is narrower than the worst-case band
        assert!(lines[1].matches('═').count() < lines[0].matches('═').count());
        // Both bands share the same center column
        assert_eq!(
            lines[0].chars().position(|c| c == '┼'),
            lines[1].chars().position(|c| c == '┼')
        );
    }

    #[test]
    fn test_render_range_bands_too_narrow_prints_bounds_only() {
        let bands = [
            ("Worst-Case", range_band(45.0, 0.35), 2),
            ("RSS", range_band(45.0, 0.229), 3),
        ];
        for width in [0, 1, 2] {
            let output = plain(&render_range_bands(45.0, &bands, width));
            let lines: Vec<&str> = output.lines().collect();

            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0], "  Worst-Case 44.65 .. 45.35");
            assert_eq!(lines[1], "  RSS        44.771 .. 45.229");
            assert!(!output.contains('│'));
        }
    }

    #[test]
    fn test_render_range_bands_zero_width() {
        let band = range_band(5.0, 0.0);
        let output = plain(&render_range_bands(5.0, &[("RSS", band, 3)], 21));

        assert!(output.contains('┼'));
        assert!(!output.contains('['));
        assert!(output.ends_with("5.000 .. 5.000"));
    }
}
