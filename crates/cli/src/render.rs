//! Plain-text rendering of a table source.

use console::{Alignment, Style, measure_text_width, pad_str};
use tactics_core::{Align, Setting, StatColor, TableRow, TableSource};

const COLUMN_GAP: &str = "  ";

/// One rendered cell before padding.
struct Cell {
    text: String,
    color: Option<StatColor>,
}

/// Renders the header line plus one line per row.
///
/// Undefined values print as blank cells. With `plain` set, no ANSI styling
/// is emitted.
pub fn render<R: TableRow>(
    source: &TableSource<'_, R>,
    rows: &[&R],
    setting: &Setting,
    plain: bool,
) -> Vec<String> {
    let headers = source.headers();
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| {
                    let stat = row.stat(header.id);
                    Cell {
                        text: stat.display_text(setting).unwrap_or_default(),
                        color: stat.color(setting),
                    }
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            cells
                .iter()
                .map(|line| measure_text_width(&line[index].text))
                .chain(std::iter::once(measure_text_width(header.name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_style = if plain { Style::new() } else { Style::new().bold() };
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join(headers.iter().zip(&widths).map(|(header, &width)| {
        let align = alignment(header.stat_type.style().align);
        header_style
            .apply_to(pad_str(header.name, width, align, None))
            .to_string()
    })));

    for line in &cells {
        lines.push(join(line.iter().zip(headers).zip(&widths).map(
            |((cell, header), &width)| {
                let align = alignment(header.stat_type.style().align);
                let padded = pad_str(&cell.text, width, align, None);
                cell_style(cell.color, plain).apply_to(padded).to_string()
            },
        )));
    }
    lines
}

fn join(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(COLUMN_GAP).trim_end().to_string()
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

fn cell_style(color: Option<StatColor>, plain: bool) -> Style {
    match (color, plain) {
        (_, true) | (None, _) => Style::new(),
        (Some(StatColor::Negative), false) => Style::new().red(),
        (Some(StatColor::Positive), false) => Style::new().green(),
    }
}
