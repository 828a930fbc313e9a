//! Pipe tables: extraction into placeholders and rendering to `<table>`.

use smallvec::SmallVec;
use tracing::warn;

use crate::HtmlWriter;
use crate::placeholder::PlaceholderStore;
use crate::render::CellKind;

/// Row bounded by pipes on both ends (checked on a trimmed line).
#[inline]
pub fn is_row(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Separator row: `|`, then only dashes, colons, pipes and whitespace, then `|`.
pub fn is_separator(trimmed: &str) -> bool {
    let Some(inner) = trimmed.strip_prefix('|').and_then(|s| s.strip_suffix('|')) else {
        return false;
    };
    !inner.is_empty()
        && inner
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
}

/// Replace every table run with a placeholder line.
///
/// Blank lines met while a run is open stay inside the run, so spacer
/// lines between rows do not split a table.
pub fn extract(input: &str, store: &mut PlaceholderStore) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut run: Vec<&str> = Vec::new();

    for line in input.split('\n') {
        let trimmed = line.trim();
        if is_row(trimmed) || is_separator(trimmed) || (!run.is_empty() && trimmed.is_empty()) {
            run.push(line);
            continue;
        }
        if !run.is_empty() {
            flush_run(&mut run, store, &mut writer);
        }
        writer.line(line);
    }
    if !run.is_empty() {
        flush_run(&mut run, store, &mut writer);
    }

    writer.finish_lines()
}

fn flush_run(run: &mut Vec<&str>, store: &mut PlaceholderStore, writer: &mut HtmlWriter) {
    let token = store.push_table(run.join("\n"));
    writer.line(&token.to_string());
    run.clear();
}

/// Split a row into trimmed cells, dropping the segments outside the
/// bounding pipes.
pub fn split_cells(row: &str) -> SmallVec<[&str; 8]> {
    let mut cells: SmallVec<[&str; 8]> = row.split('|').skip(1).map(str::trim).collect();
    cells.pop();
    cells
}

/// Render a raw table block.
///
/// The first line is a header row unless a separator came before it;
/// separator rows produce no output. Rows not bounded by pipes are
/// reported and skipped.
pub fn render(raw: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(raw.len() * 2);
    let mut separator_seen = false;

    writer.table_start();
    for (index, line) in raw.trim().split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_separator(line) {
            separator_seen = true;
            continue;
        }
        if !is_row(line) {
            warn!(row = line, "skipping malformed table row");
            continue;
        }

        let kind = if !separator_seen && index == 0 {
            CellKind::Header
        } else {
            CellKind::Data
        };
        writer.row_start();
        for cell in split_cells(line) {
            writer.cell(kind, cell);
        }
        writer.row_end();
    }
    writer.table_end();

    writer.into_string()
}
