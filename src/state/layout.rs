// Grid placement of element tiles (18 columns, 7 main rows plus the f-block).

use crate::model::ElementData;

pub const MAIN_COLUMNS: u32 = 18;
pub const MAIN_ROWS: u32 = 7;

pub fn is_lanthanide(n: u32) -> bool {
    (57..=71).contains(&n)
}

pub fn is_actinide(n: u32) -> bool {
    (89..=103).contains(&n)
}

/// 1-based `(row, column)` of an element in the main grid, or `None` for
/// f-block elements and numbers outside the table.
pub fn main_grid_slot(n: u32) -> Option<(u32, u32)> {
    let slot = match n {
        1 => (1, 1),
        2 => (1, 18),
        3..=4 => (2, n - 2),
        5..=10 => (2, n + 8),
        11..=12 => (3, n - 10),
        13..=18 => (3, n),
        19..=36 => (4, n - 18),
        37..=54 => (5, n - 36),
        55..=56 => (6, n - 54),
        72..=86 => (6, n - 68),
        87..=88 => (7, n - 86),
        104..=118 => (7, n - 100),
        _ => return None,
    };
    Some(slot)
}

/// Slot placeholders pointing at the detached f-block rows.
pub const F_BLOCK_PLACEHOLDERS: [(u32, u32, &str); 2] = [(6, 3, "57-71"), (7, 3, "89-103")];

/// The table split into the main grid and the two f-block rows, each in
/// dataset order.
pub struct TableLayout<'a> {
    pub main: Vec<(&'a ElementData, (u32, u32))>,
    pub lanthanides: Vec<&'a ElementData>,
    pub actinides: Vec<&'a ElementData>,
}

impl<'a> TableLayout<'a> {
    pub fn build(elements: &'a [ElementData]) -> Self {
        let mut main = Vec::new();
        let mut lanthanides = Vec::new();
        let mut actinides = Vec::new();
        for e in elements {
            if is_lanthanide(e.number) {
                lanthanides.push(e);
            } else if is_actinide(e.number) {
                actinides.push(e);
            } else if let Some(slot) = main_grid_slot(e.number) {
                main.push((e, slot));
            }
        }
        Self {
            main,
            lanthanides,
            actinides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements;
    use std::collections::HashSet;

    #[test]
    fn known_positions() {
        assert_eq!(main_grid_slot(1), Some((1, 1)));
        assert_eq!(main_grid_slot(2), Some((1, 18)));
        assert_eq!(main_grid_slot(5), Some((2, 13)));
        assert_eq!(main_grid_slot(26), Some((4, 8)));
        assert_eq!(main_grid_slot(56), Some((6, 2)));
        assert_eq!(main_grid_slot(72), Some((6, 4)));
        assert_eq!(main_grid_slot(118), Some((7, 18)));
        assert_eq!(main_grid_slot(57), None);
        assert_eq!(main_grid_slot(0), None);
    }

    #[test]
    fn every_element_has_exactly_one_place() {
        let layout = TableLayout::build(elements());
        assert_eq!(layout.lanthanides.len(), 15);
        assert_eq!(layout.actinides.len(), 15);
        assert_eq!(layout.main.len(), 118 - 30);

        let mut seen = HashSet::new();
        for (e, (row, col)) in &layout.main {
            assert!((1..=MAIN_ROWS).contains(row), "{} row {row}", e.symbol);
            assert!((1..=MAIN_COLUMNS).contains(col), "{} col {col}", e.symbol);
            assert!(seen.insert((*row, *col)), "{} overlaps", e.symbol);
        }
        for (row, col, _) in F_BLOCK_PLACEHOLDERS {
            assert!(!seen.contains(&(row, col)));
        }
    }

    #[test]
    fn f_block_rows_keep_order() {
        let layout = TableLayout::build(elements());
        assert_eq!(layout.lanthanides.first().map(|e| e.number), Some(57));
        assert_eq!(layout.lanthanides.last().map(|e| e.number), Some(71));
        assert_eq!(layout.actinides.first().map(|e| e.number), Some(89));
        assert_eq!(layout.actinides.last().map(|e| e.number), Some(103));
    }
}
