// In: src/display.rs

//! Plain-text rendering of a table's current page, for terminals and logs.
//!
//! Only visible columns are shown, each cell goes through its column's
//! `render`, and widths are measured in characters so the arrows used by
//! the movement indicator line up.

use colored::{ColoredString, Colorize};

use crate::classifier::{AnnotatedEntry, Classification};
use crate::table::TableEngine;
use crate::types::Record;

const COLUMN_GAP: &str = "  ";

/// Renders the header, the current page and a `Page x of y` footer.
pub fn render_table<R: Record>(engine: &TableEngine<R>) -> String {
    let lines = layout(engine);
    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&footer(engine));
    out
}

/// Like `render_table`, with podium and qualifier rows highlighted.
pub fn render_leaderboard(engine: &TableEngine<AnnotatedEntry>) -> String {
    let lines = layout(engine);
    let rows = engine.visible_rows();

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        // Line 0 is the header, line 1 the rule.
        let styled = match i.checked_sub(2).and_then(|r| rows.get(r)) {
            Some(entry) => highlight(line, entry.classification).to_string(),
            None if i == 0 => line.bold().to_string(),
            None => line.clone(),
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out.push_str(&footer(engine));
    out
}

fn highlight(line: &str, classification: Classification) -> ColoredString {
    let colored = match classification {
        Classification::Podium(1) => line.yellow(),
        Classification::Podium(2) => line.white(),
        Classification::Podium(_) => line.truecolor(205, 127, 50),
        Classification::Qualifier => line.green(),
        Classification::None => line.normal(),
    };
    if classification.is_podium() {
        colored.bold()
    } else {
        colored
    }
}

fn layout<R: Record>(engine: &TableEngine<R>) -> Vec<String> {
    let columns = engine.visible_columns();
    let rows = engine.visible_rows();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| engine.render_cell(row, &c.key))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.display_label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<&str> = columns.iter().map(|c| c.display_label.as_str()).collect();
    let mut lines = vec![join_padded(&header, &widths)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );

    if cells.is_empty() {
        lines.push("No results.".to_string());
    }
    for row in &cells {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(join_padded(&refs, &widths));
    }
    lines
}

fn join_padded(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

fn footer<R: Record>(engine: &TableEngine<R>) -> String {
    format!(
        "Page {} of {} ({} rows)",
        engine.state().pagination.page_index + 1,
        engine.page_count(),
        engine.filtered_count()
    )
}
