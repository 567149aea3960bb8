use crate::*;
pub use random::*;

mod random;

/// Source of candidate mine positions.
///
/// Placement keeps drawing until it has enough distinct in-range cells, so a picker only
/// has to be uniform over `0..cell_count`, it does not have to avoid repeats.
pub trait CellPicker {
    fn pick(&mut self, cell_count: CellIndex) -> CellIndex;
}

impl<P: CellPicker + ?Sized> CellPicker for &mut P {
    fn pick(&mut self, cell_count: CellIndex) -> CellIndex {
        (**self).pick(cell_count)
    }
}
