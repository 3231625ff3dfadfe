use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::config::ColorMode;
use crate::scoring::factors::BAND_TABLES;
use crate::scoring::{
    CalculationResult, FactorContribution, ValidationFailure, ADAPTATION_FACTORS_MAX,
    CAPITAL_HUMAN_MAX, LABOUR_MARKET_NEEDS_MAX, TOTAL_MAX,
};

/// Width of the label column in breakdowns
const LABEL_WIDTH: usize = 34;

/// Resolve a color mode for stdout; `Auto` colors only when stdout is a TTY.
pub fn should_use_colors(mode: ColorMode) -> bool {
    resolve_colors(mode, std::io::stdout().is_terminal())
}

/// Same as [`should_use_colors`], for text written to stderr.
pub fn should_use_colors_on_stderr(mode: ColorMode) -> bool {
    resolve_colors(mode, std::io::stderr().is_terminal())
}

fn resolve_colors(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal,
    }
}

fn format_heading(title: &str, points: u32, max: u32, use_colors: bool) -> String {
    let score = format!("{} / {}", points, max);
    let width = LABEL_WIDTH + 2;
    if use_colors {
        format!("{:<width$}{:>9}", title.bold(), score.bold())
    } else {
        format!("{:<width$}{:>9}", title, score)
    }
}

fn format_contribution(item: &FactorContribution, use_colors: bool) -> String {
    let score = format!("{:>3} / {:<3}", item.points, item.max);
    let label = format!("{}:", item.label);
    let width = LABEL_WIDTH;
    if !use_colors {
        return format!("  {:<width$}{}", label, score);
    }
    if item.points == 0 {
        format!("  {:<width$}{}", label, score.dimmed())
    } else if item.points == item.max {
        format!("  {:<width$}{}", label, score.green())
    } else {
        format!("  {:<width$}{}", label, score)
    }
}

fn format_category(
    title: &str,
    total: u32,
    max: u32,
    items: &[FactorContribution],
    has_spouse: bool,
    use_colors: bool,
) -> Vec<String> {
    let mut lines = vec![format_heading(title, total, max, use_colors)];
    lines.extend(
        items
            .iter()
            .filter(|item| has_spouse || !item.spouse_only)
            .map(|item| format_contribution(item, use_colors)),
    );
    lines
}

/// Format a result as a multi-line breakdown, one block per category.
/// Spouse factors are shown only when the application has a spouse.
pub fn format_result(result: &CalculationResult, use_colors: bool) -> String {
    let detail = &result.detailed_points;
    let mut lines = Vec::new();

    let total = format!("{} / {}", result.total_points, TOTAL_MAX);
    if use_colors {
        lines.push(format!("Total Points: {}", total.bold().cyan()));
    } else {
        lines.push(format!("Total Points: {}", total));
    }
    lines.push(String::new());

    lines.extend(format_category(
        "Capital Human",
        result.category_points.capital_human,
        CAPITAL_HUMAN_MAX,
        &detail.capital_human.contributions(result.has_spouse),
        result.has_spouse,
        use_colors,
    ));
    lines.push(String::new());
    lines.extend(format_category(
        "Labour Market Needs & Priorities",
        result.category_points.labour_market_needs,
        LABOUR_MARKET_NEEDS_MAX,
        &detail.labour_market_needs.contributions(),
        result.has_spouse,
        use_colors,
    ));
    lines.push(String::new());
    lines.extend(format_category(
        "Adaptation Factors",
        result.category_points.adaptation_factors,
        ADAPTATION_FACTORS_MAX,
        &detail.adaptation_factors.contributions(),
        result.has_spouse,
        use_colors,
    ));

    lines.join("\n")
}

/// Format a result as pretty-printed camelCase JSON
pub fn format_json(result: &CalculationResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize result")
}

/// Format every field error, one per line
pub fn format_validation_failure(failure: &ValidationFailure, use_colors: bool) -> String {
    let header = format!("Input is invalid ({} error(s)):", failure.errors.len());
    let mut lines = Vec::with_capacity(failure.errors.len() + 1);
    if use_colors {
        lines.push(header.red().to_string());
    } else {
        lines.push(header);
    }
    for error in &failure.errors {
        if use_colors {
            lines.push(format!("  - {}: {}", error.path.yellow(), error.kind));
        } else {
            lines.push(format!("  - {}: {}", error.path, error.kind));
        }
    }
    lines.join("\n")
}

fn format_ceiling(title: &str, max: u32) -> String {
    let width = LABEL_WIDTH + 2;
    format!("{:<width$}{:>5}", title, max)
}

/// Format the category ceilings and every banded point table
pub fn format_grid(use_colors: bool) -> String {
    let mut lines = vec![
        format_ceiling("Capital Human", CAPITAL_HUMAN_MAX),
        format_ceiling("Labour Market Needs & Priorities", LABOUR_MARKET_NEEDS_MAX),
        format_ceiling("Adaptation Factors", ADAPTATION_FACTORS_MAX),
        format_ceiling("Total", TOTAL_MAX),
    ];

    for (name, bands) in BAND_TABLES {
        lines.push(String::new());
        if use_colors {
            lines.push(name.bold().to_string());
        } else {
            lines.push(name.to_string());
        }
        for band in bands.iter() {
            lines.push(format!("  {:<8} {:>4}", band.range.to_string(), band.points));
        }
        lines.push(format!("  {:<8} {:>4}", "other", 0));
    }

    lines.join("\n")
}
