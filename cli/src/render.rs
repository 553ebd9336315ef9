use minas_core::{Cell, Coordinate, GameEngine, Visibility};
use std::fmt::Write;

/// Text view of the board: a flag counter, the column letters, then one line per row.
///
/// `#` covered, `@` flagged, digits for adjacent mines, blank for zero.
/// With `reveal_mines` an uncovered mine is drawn as `X`; covered mines stay hidden.
pub fn render(engine: &GameEngine, reveal_mines: bool) -> String {
    let bounds = engine.bounds();
    let mut out = String::new();

    writeln!(out, "[Flags {}/{}]", engine.count_flags(), engine.total_mines()).unwrap();
    out.push(' ');
    out.extend('A'..=bounds.last_col());
    out.push('\n');

    for row in 1..=bounds.last_row() {
        write!(out, "{:02}|", row).unwrap();
        for col in 'A'..=bounds.last_col() {
            let coord = Coordinate::new(col, row);
            if let Ok(cell) = engine.cell_at(coord) {
                out.push(glyph(engine, coord, cell, reveal_mines));
            }
        }
        out.push('\n');
    }

    out
}

fn glyph(engine: &GameEngine, coord: Coordinate, cell: Cell, reveal_mines: bool) -> char {
    match cell.visibility {
        Visibility::Covered => '#',
        Visibility::Flagged => '@',
        Visibility::Uncovered if reveal_mines && cell.is_mine => 'X',
        Visibility::Uncovered => match engine.board().count_adjacent_mines(coord) {
            0 => ' ',
            count => char::from(b'0' + count),
        },
    }
}
