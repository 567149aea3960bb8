/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag counts, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Row-major linear cell index, `row * cols + col`.
pub type CellIndex = usize;

/// Number of cells on a board of `size`. Cannot overflow, `255 * 255` fits a `CellCount`.
pub const fn area((rows, cols): Coord2) -> CellCount {
    (rows as CellCount) * (cols as CellCount)
}

/// `ndarray` index for `coords`.
pub(crate) fn nd((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

/// Linear index of `coords` on a board with `size`.
pub const fn linear_index((row, col): Coord2, size: Coord2) -> CellIndex {
    (row as CellIndex) * (size.1 as CellIndex) + (col as CellIndex)
}

/// Inverse of [`linear_index`]. Returns `None` when `index` lies outside the board.
pub fn coords_of(index: CellIndex, size: Coord2) -> Option<Coord2> {
    let cols = CellIndex::from(size.1);
    if cols == 0 || index >= CellIndex::from(area(size)) {
        return None;
    }
    let row = (index / cols).try_into().ok()?;
    let col = (index % cols).try_into().ok()?;
    Some((row, col))
}

/// The up-to-8 cells around `center` that lie on a board of `size`, in row-major order.
///
/// Rows and columns are clamped separately, so the last cell of one row is never a
/// neighbor of the first cell of the next.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = size;
    let row_span = row.saturating_sub(1)..=row.saturating_add(1).min(rows.saturating_sub(1));
    let col_span = col.saturating_sub(1)..=col.saturating_add(1).min(cols.saturating_sub(1));

    row_span
        .flat_map(move |r| col_span.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}
