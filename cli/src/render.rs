use minesweep_core::{BoardView, CellView};
use std::fmt;

pub(crate) fn glyph(cell: CellView) -> char {
    use CellView::*;
    match cell {
        Hidden => '.',
        Flagged => 'F',
        WronglyFlagged => 'X',
        ExposedMine => '*',
        Revealed(0) => ' ',
        Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// Draws the board as a grid with row and column rulers, followed by the status line.
pub(crate) struct Grid<'a>(pub(crate) &'a BoardView);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        f.write_str("   ")?;
        for col in 0..view.cols {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;

        for row in 0..view.rows {
            write!(f, "{row:>3}")?;
            for col in 0..view.cols {
                write!(f, "{:>3}", glyph(view.cell((row, col))))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "[{}]", view.status_text)
    }
}
