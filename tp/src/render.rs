//! Plan rendering for the front ends
//!
//! Three forms are supported: plain text (optionally ANSI-colored), HTML rich
//! text with `<font>` tags, and JSON. Sort 1 segments are tagged
//! green and Sort 2 segments red in the colored forms.

use colored::Colorize;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plan::{CutLine, Plan, PlanOrigin, Segment};
use crate::ratio::ALLOWED_RATIOS;
use crate::sort::{SORT_1, SORT_2, SORT_BOUNDARY, SortCategory};

/// Output format for rendered plans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "html" | "rich" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text, html, or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render `plan` in the requested format
pub fn render(plan: &Plan, format: OutputFormat, color: bool) -> Result<String> {
    debug!(%format, color, origin = ?plan.origin, "render: called");
    match format {
        OutputFormat::Text => Ok(render_text(plan, color)),
        OutputFormat::Html => Ok(render_html(plan)),
        OutputFormat::Json => render_json(plan),
    }
}

/// Plain text, blocks separated by a blank line
pub fn render_text(plan: &Plan, color: bool) -> String {
    let style = LengthStyle::for_origin(plan.origin);
    let lines: Vec<String> = plan
        .lines
        .iter()
        .map(|line| {
            cut_line(line, style, |segment, count, length| {
                let text = format!("{} {}", count, length);
                if color { paint(segment.category, text) } else { text }
            })
        })
        .collect();

    format!("{}\n\n{}\n\n{}", input_echo(plan, style), lines.join("\n"), ratio_line(plan))
}

/// Rich text with `<font>` color tags
///
/// Search plans tag only the piece length (`2x <font ...>330.5 m</font>`);
/// the fixed and single-tape plans tag the whole segment.
pub fn render_html(plan: &Plan) -> String {
    let style = LengthStyle::for_origin(plan.origin);
    let tag_count = plan.origin != PlanOrigin::Search;
    let lines: Vec<String> = plan
        .lines
        .iter()
        .map(|line| {
            cut_line(line, style, |segment, count, length| {
                let color = segment.category.color_name();
                if tag_count {
                    format!("<font color='{}'>{} {}</font>", color, count, length)
                } else {
                    format!("{} <font color='{}'>{}</font>", count, color, length)
                }
            })
        })
        .collect();

    format!(
        "{}<br><br>{}<br><br>{}",
        input_echo(plan, style),
        lines.join("<br>"),
        ratio_line(plan)
    )
}

/// Pretty-printed JSON of the plan
pub fn render_json(plan: &Plan) -> Result<String> {
    serde_json::to_string_pretty(plan).context("Failed to serialize plan")
}

/// Lengths print with a trailing `.0` when whole, e.g. `300.0`, `330.5`
pub fn format_length(value: f64) -> String {
    format!("{:?}", value)
}

/// Summary of the sort ranges and allowed ratios
pub fn render_ranges(color: bool) -> String {
    let label = |category: SortCategory| {
        let text = category.to_string();
        if color { paint(category, text) } else { text }
    };
    let ratios: Vec<String> = ALLOWED_RATIOS.iter().map(|r| r.to_string()).collect();

    [
        format!(
            "{}: {} - {} m ({} lengths, step 0.1)",
            label(SortCategory::Sort1),
            format_length(SORT_1.min()),
            format_length(SORT_1.max()),
            SORT_1.len()
        ),
        format!(
            "{}: {} - {} m ({} lengths, step 0.1)",
            label(SortCategory::Sort2),
            format_length(SORT_2.min()),
            format_length(SORT_2.max()),
            SORT_2.len()
        ),
        format!("Boundary: {} m", SORT_BOUNDARY),
        format!("Allowed ratios: {}", ratios.join(", ")),
    ]
    .join("\n")
}

fn paint(category: SortCategory, text: String) -> String {
    match category {
        SortCategory::Sort1 => text.green().to_string(),
        SortCategory::Sort2 => text.red().to_string(),
    }
}

/// The fixed plan prints whole numbers bare, everything else keeps `.0`
#[derive(Debug, Clone, Copy)]
enum LengthStyle {
    Bare,
    Decimal,
}

impl LengthStyle {
    fn for_origin(origin: PlanOrigin) -> Self {
        match origin {
            PlanOrigin::Fixed => Self::Bare,
            PlanOrigin::SingleTape | PlanOrigin::Search => Self::Decimal,
        }
    }

    fn format(self, value: f64) -> String {
        match self {
            Self::Bare => value.to_string(),
            Self::Decimal => format_length(value),
        }
    }
}

fn input_echo(plan: &Plan, style: LengthStyle) -> String {
    let lengths: Vec<String> = plan.input.iter().map(|&l| style.format(l)).collect();
    match plan.origin {
        PlanOrigin::Fixed | PlanOrigin::SingleTape => format!("Input is {} m", lengths.join(" m, ")),
        PlanOrigin::Search => format!(
            "Input is {} m, sum {} m",
            lengths.join(" m, "),
            style.format(plan.total())
        ),
    }
}

/// `decorate` receives the segment with its `Nx` count and `L m` length texts
fn cut_line(line: &CutLine, style: LengthStyle, decorate: impl Fn(&Segment, String, String) -> String) -> String {
    let segments: Vec<String> = line
        .segments
        .iter()
        .map(|segment| {
            let count = format!("{}x", segment.count);
            let length = format!("{} m", style.format(segment.length));
            decorate(segment, count, length)
        })
        .collect();
    format!("{} from {} m tape", segments.join(", "), style.format(line.source))
}

fn ratio_line(plan: &Plan) -> String {
    format!("Ratio    {}", plan.ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::{find_combinations, fixed_plan};

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(300.0), "300.0");
        assert_eq!(format_length(330.5), "330.5");
        assert_eq!(format_length(1020.0), "1020.0");
        assert_eq!(format_length(300.1), "300.1");
    }

    #[test]
    fn test_fixed_plan_text() {
        let text = render_text(&fixed_plan(), false);
        assert_eq!(text, "Input is 960 m\n\n2x 300 m, 1x 360 m from 960 m tape\n\nRatio    2:1");
    }

    #[test]
    fn test_fixed_plan_html() {
        let html = render_html(&fixed_plan());
        assert_eq!(
            html,
            "Input is 960 m<br><br><font color='green'>2x 300 m</font>, <font color='red'>1x 360 m</font> \
             from 960 m tape<br><br>Ratio    2:1"
        );
    }

    #[test]
    fn test_single_tape_text() {
        let plan = find_combinations(&[961.0]).unwrap();
        assert_eq!(
            render_text(&plan, false),
            "Input is 961.0 m\n\n2x 300.0 m, 1x 361.0 m from 961.0 m tape\n\nRatio    2:1"
        );
    }

    #[test]
    fn test_search_text() {
        let plan = find_combinations(&[620.0, 400.0]).unwrap();
        assert_eq!(
            render_text(&plan, false),
            "Input is 620.0 m, 400.0 m, sum 1020.0 m\n\n\
             2x 310.0 m from 620.0 m tape\n\
             1x 400.0 m from 400.0 m tape\n\n\
             Ratio    2:1"
        );
    }

    #[test]
    fn test_search_html_tags_categories() {
        let plan = find_combinations(&[661.0, 661.0, 400.0]).unwrap();
        let html = render_html(&plan);
        assert!(html.starts_with("Input is 661.0 m, 661.0 m, 400.0 m, sum 1722.0 m<br><br>"));
        assert!(html.contains(
            "1x <font color='green'>300.0 m</font>, 1x <font color='red'>361.0 m</font> from 661.0 m tape<br>"
        ));
        assert!(html.contains("2x <font color='green'>330.5 m</font> from 661.0 m tape"));
        assert!(html.ends_with("<br><br>Ratio    3:2"));
    }

    #[test]
    fn test_single_tape_html_tags_whole_segment() {
        let plan = find_combinations(&[961.0]).unwrap();
        assert_eq!(
            render_html(&plan),
            "Input is 961.0 m<br><br><font color='green'>2x 300.0 m</font>, <font color='red'>1x 361.0 m</font> \
             from 961.0 m tape<br><br>Ratio    2:1"
        );
    }

    #[test]
    fn test_colored_text_keeps_content() {
        colored::control::set_override(true);
        let plan = find_combinations(&[620.0, 400.0]).unwrap();
        let text = render_text(&plan, true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("310.0 m"));
        assert!(text.ends_with("Ratio    2:1"));
    }

    #[test]
    fn test_json() {
        let plan = find_combinations(&[620.0, 400.0]).unwrap();
        let json = render(&plan, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ratio"], "2:1");
        assert_eq!(value["lines"][1]["segments"][0]["category"], "sort2");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("table".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "text");
    }

    #[test]
    fn test_ranges() {
        let text = render_ranges(false);
        assert!(text.contains("Sort 1: 300.0 - 360.0 m (601 lengths, step 0.1)"));
        assert!(text.contains("Sort 2: 361.0 - 600.0 m (2391 lengths, step 0.1)"));
        assert!(text.contains("Boundary: 360.5 m"));
        assert!(text.ends_with("Allowed ratios: 2:1, 5:2, 3:2"));
    }
}
