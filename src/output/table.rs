use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::ParsedLog;

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Per-log task and section counts with a total row
pub(crate) fn render_log_table(logs: &[ParsedLog], use_color: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Done", use_color),
        header_cell("Pending", use_color),
        header_cell("Sections", use_color),
    ]);

    let done_color = if use_color { Some(Color::Green) } else { None };
    let pending_color = if use_color { Some(Color::Yellow) } else { None };

    let (mut done, mut pending, mut sections) = (0, 0, 0);
    for log in logs {
        done += log.tasks.completed.len();
        pending += log.tasks.pending.len();
        sections += log.sections.len();
        table.add_row(vec![
            Cell::new(&log.date),
            right_cell(&log.tasks.completed.len().to_string(), done_color, false),
            right_cell(&log.tasks.pending.len().to_string(), pending_color, false),
            right_cell(&log.sections.len().to_string(), None, false),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        right_cell(&done.to_string(), done_color, true),
        right_cell(&pending.to_string(), pending_color, true),
        right_cell(&sections.to_string(), None, true),
    ]);

    table.to_string()
}

/// Share of checklist items marked done, as a whole percentage
pub(crate) fn completion_rate(logs: &[ParsedLog]) -> Option<u32> {
    let done: usize = logs.iter().map(|l| l.tasks.completed.len()).sum();
    let pending: usize = logs.iter().map(|l| l.tasks.pending.len()).sum();
    let total = done + pending;
    if total == 0 {
        return None;
    }
    Some(((done * 100 + total / 2) / total) as u32)
}
