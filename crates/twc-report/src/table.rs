//! Terminal tables built with comfy-table.
//!
//! Shade cells are drawn in the shade's own colour on the active background,
//! so the table reads the same way the grid page does.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use twc_contrast::{round_ratio, wcag};
use twc_core::{ContrastGrid, GridCell, GridSection, scale_swatch};
use twc_model::{ColorScale, Grade, HexColor, Palette, Score};

use crate::common::score_label;

pub fn grid_table(grid: &ContrastGrid) -> Table {
    let columns = grid.shade_columns();
    let mut table = Table::new();
    let mut header = vec![header_cell("Scale")];
    header.extend(columns.iter().map(|shade| header_cell(shade.as_str())));
    table.set_header(header);
    apply_grid_table_style(&mut table);
    for index in 1..=columns.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }

    for section in &grid.sections {
        let mut row = vec![scale_cell(section)];
        for shade in &columns {
            let cell = section
                .cells
                .iter()
                .find(|cell| &cell.shade == shade)
                .map_or_else(|| dim_cell("-"), |cell| shade_cell(cell, grid.background));
            row.push(cell);
        }
        table.add_row(row);
    }
    table
}

/// Scales of a palette with their representative swatch.
pub fn palette_table(palette: &Palette) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scale"),
        header_cell("Swatch"),
        header_cell("Shades"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for scale in palette.scales() {
        table.add_row(vec![
            Cell::new(scale.name()).add_attribute(Attribute::Bold),
            swatch_cell(scale_swatch(scale)),
            Cell::new(scale.len()),
        ]);
    }
    table
}

/// Shades of one scale, raw and normalized.
pub fn shade_table(scale: &ColorScale) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Shade"),
        header_cell("Value"),
        header_cell("Hex"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in scale.shades() {
        table.add_row(vec![
            Cell::new(entry.shade.as_str()),
            Cell::new(&entry.raw),
            swatch_cell(twc_contrast::normalize(&entry.raw)),
        ]);
    }
    table
}

/// Ratio, grade and per-threshold results for a single pair.
pub fn pair_table(foreground: HexColor, background: HexColor, score: Score) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        header_cell("Foreground"),
        Cell::new(foreground.to_string()).fg(rgb(foreground)).bg(rgb(background)),
    ]);
    table.add_row(vec![header_cell("Background"), swatch_cell(Some(background))]);
    table.add_row(vec![
        header_cell("Ratio"),
        Cell::new(format!("{:.2}:1", round_ratio(score.ratio))).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![header_cell("Grade"), grade_cell(score.grade)]);
    let checks = [
        ("AA large text", wcag::AA_LARGE_MIN_RATIO),
        ("AA normal text", wcag::AA_MIN_RATIO),
        ("AAA large text", wcag::AA_MIN_RATIO),
        ("AAA normal text", wcag::AAA_MIN_RATIO),
    ];
    for (label, minimum) in checks {
        table.add_row(vec![header_cell(label), pass_cell(score.ratio >= minimum)]);
    }
    table
}

fn apply_grid_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rgb(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn scale_cell(section: &GridSection) -> Cell {
    let cell = Cell::new(&section.scale).add_attribute(Attribute::Bold);
    match section.heading_color {
        Some(color) => cell.fg(rgb(color)),
        None => cell,
    }
}

fn shade_cell(cell: &GridCell, background: Option<HexColor>) -> Cell {
    let content = format!("{}\n{}", cell.color, score_label(cell.score));
    let styled = Cell::new(content).fg(rgb(cell.color));
    match background {
        Some(background) => styled.bg(rgb(background)),
        None => styled,
    }
}

fn swatch_cell(color: Option<HexColor>) -> Cell {
    match color {
        Some(color) => Cell::new(format!("██ {color}")).fg(rgb(color)),
        None => dim_cell("-"),
    }
}

fn grade_cell(grade: Grade) -> Cell {
    let color = match grade {
        Grade::Aaa | Grade::Aa => Color::Green,
        Grade::AaLarge => Color::Yellow,
        Grade::Fail => Color::Red,
    };
    Cell::new(grade.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn pass_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
