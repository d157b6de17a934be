//! Column-synchronized grid of diagram cells.
//!
//! A [`Grid`] holds one row of [`Cell`]s per wire. Every row always has the
//! same length, so the grid can be read as a matrix with wires as rows and
//! time steps as columns. Gates are placed greedily: a gate reuses the
//! rightmost column when the cells it needs there are free, and otherwise
//! every wire advances by one column together.

use itertools::Itertools;
use log::{ debug, trace };
use crate::markup::Markup;

/// A single slot on a wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Bare wire.
    Empty,
    /// Labeled gate box.
    Gate(String),
    /// Control marker, holding the signed distance to its target wire.
    Control(isize),
    /// Target symbol.
    Target,
}

impl Cell {
    /// Create a new gate box.
    pub fn gate<S>(caption: S) -> Self
    where S: Into<String>
    {
        Self::Gate(caption.into())
    }

    /// Return `true` if `self` is `Empty`.
    pub fn is_empty(&self) -> bool { matches!(self, Self::Empty) }

    /// Return `true` if `self` is `Gate`.
    pub fn is_gate(&self) -> bool { matches!(self, Self::Gate(..)) }

    /// Return `true` if `self` is `Control`.
    pub fn is_control(&self) -> bool { matches!(self, Self::Control(..)) }

    /// Return `true` if `self` is `Target`.
    pub fn is_target(&self) -> bool { matches!(self, Self::Target) }

    /// Render `self` with a particular markup.
    pub fn render<M>(&self, markup: &M) -> String
    where M: Markup + ?Sized
    {
        match self {
            Self::Empty => markup.empty_wire(),
            Self::Gate(caption) => markup.gate_box(caption),
            Self::Control(distance) => markup.control(*distance),
            Self::Target => markup.target(),
        }
    }
}

/// Per-wire sequences of [`Cell`]s, kept rectangular.
///
/// A new grid has one empty column. Columns are only ever appended on the
/// right; existing cells are only replaced when they are empty.
///
/// The placement methods take wire indices as preconditions: *they panic if
/// any index is out of bounds*. [`Circuit`][crate::circuit::Circuit] checks
/// indices before calling them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    wires: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a new grid of `n` wires, each holding a single empty cell.
    pub fn new(n: usize) -> Self {
        Self { wires: (0..n).map(|_| vec![Cell::Empty]).collect() }
    }

    /// Return the number of wires.
    pub fn num_wires(&self) -> usize { self.wires.len() }

    /// Return the number of columns.
    pub fn num_columns(&self) -> usize {
        self.wires.first().map(|w| w.len()).unwrap_or(0)
    }

    /// Return the cells on wire `k`, if it exists.
    pub fn wire(&self, k: usize) -> Option<&[Cell]> {
        self.wires.get(k).map(|w| w.as_slice())
    }

    /// Return an iterator over all wires in index order.
    pub fn wires(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.wires.iter().map(|w| w.as_slice())
    }

    /// Return the cells in column `j` in wire order, if it exists.
    pub fn column(&self, j: usize) -> Option<Vec<&Cell>> {
        (j < self.num_columns())
            .then(|| self.wires.iter().map(|w| &w[j]).collect())
    }

    /// Return `true` if every wire holds the same number of cells.
    pub fn is_rectangular(&self) -> bool {
        self.wires.iter().map(|w| w.len()).all_equal()
    }

    /// Return `true` if `cell` is bare wire.
    pub fn is_empty(cell: &Cell) -> bool { cell.is_empty() }

    /// Return `true` if the rightmost cell of every wire is empty.
    pub fn on_empty_column(&self) -> bool {
        self.wires.iter()
            .all(|w| w.last().map(Self::is_empty).unwrap_or(true))
    }

    fn add_column(&mut self) {
        debug!("appending column {}", self.num_columns());
        self.wires.iter_mut().for_each(|w| w.push(Cell::Empty));
    }

    fn last_mut(&mut self, wire: usize) -> &mut Cell {
        let w = &mut self.wires[wire];
        if w.is_empty() { w.push(Cell::Empty); }
        let n = w.len();
        &mut w[n - 1]
    }

    fn last_is_empty(&self, wire: usize) -> bool {
        self.wires[wire].last().map(Self::is_empty).unwrap_or(true)
    }

    /// Place `cell` on `wire`.
    ///
    /// The rightmost column is reused if `wire`'s slot there is empty, no
    /// matter what the other wires hold; otherwise a new column is started
    /// with `cell` on `wire` and bare wire everywhere else.
    pub fn single_wire_gate(&mut self, wire: usize, cell: Cell) {
        if self.last_is_empty(wire) {
            trace!("reusing column {} on wire {}", self.num_columns() - 1, wire);
            *self.last_mut(wire) = cell;
        } else {
            self.add_column();
            *self.last_mut(wire) = cell;
        }
    }

    /// Place copies of `cell` on each of `wires`.
    ///
    /// The rightmost column is reused only if it is entirely empty. If any
    /// wire at all is occupied there, including wires the gate does not
    /// touch, a new column is started.
    pub fn multi_wire_gate(&mut self, cell: Cell, wires: &[usize]) {
        if !self.on_empty_column() {
            self.add_column();
        } else {
            trace!("reusing empty column {} for wires {:?}",
                self.num_columns().saturating_sub(1), wires);
        }
        for &wire in wires.iter() {
            *self.last_mut(wire) = cell.clone();
        }
    }

    /// Place a control marker on `source` and `cell` on `target`.
    ///
    /// The marker records `target - source`, so a negative distance points
    /// upward. The rightmost column is reused if both `source` and `target`
    /// are empty there; otherwise a new column is started.
    pub fn controlled_pair_gate(&mut self, source: usize, target: usize, cell: Cell) {
        let distance = target as isize - source as isize;
        if self.last_is_empty(source) && self.last_is_empty(target) {
            trace!("reusing column {} for control {} -> {}",
                self.num_columns() - 1, source, target);
        } else {
            self.add_column();
        }
        *self.last_mut(source) = Cell::Control(distance);
        *self.last_mut(target) = cell;
    }
}

#[cfg(test)]
mod tests {
    use rand::{ thread_rng, Rng };
    use super::*;

    fn x() -> Cell { Cell::gate("X") }

    #[test]
    fn init() {
        let grid = Grid::new(3);
        assert_eq!(grid.num_wires(), 3);
        assert_eq!(grid.num_columns(), 1);
        assert!(grid.wires().all(|w| w == [Cell::Empty]));
        assert!(grid.on_empty_column());
        assert!(grid.is_rectangular());

        let empty = Grid::new(0);
        assert_eq!(empty.num_wires(), 0);
        assert_eq!(empty.num_columns(), 0);
        assert!(empty.is_rectangular());
    }

    #[test]
    fn single_reuse() {
        let mut grid = Grid::new(3);
        grid.single_wire_gate(1, x());
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(grid.wire(0), Some([Cell::Empty].as_slice()));
        assert_eq!(grid.wire(1), Some([x()].as_slice()));
        assert_eq!(grid.wire(2), Some([Cell::Empty].as_slice()));

        // other wires are occupied, but wire 0 is still free
        grid.single_wire_gate(0, Cell::gate("Z"));
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(grid.column(0), Some(vec![&Cell::gate("Z"), &x(), &Cell::Empty]));
    }

    #[test]
    fn single_overflow() {
        let mut grid = Grid::new(3);
        grid.single_wire_gate(1, x());
        grid.single_wire_gate(1, x());
        assert_eq!(grid.num_columns(), 2);
        assert!(grid.is_rectangular());
        assert_eq!(grid.column(1), Some(vec![&Cell::Empty, &x(), &Cell::Empty]));

        // wire 0 still has a free slot in column 0, but it is not the last
        grid.single_wire_gate(0, Cell::gate("D"));
        assert_eq!(grid.num_columns(), 2);
        assert_eq!(grid.column(1), Some(vec![&Cell::gate("D"), &x(), &Cell::Empty]));
        assert_eq!(grid.column(0), Some(vec![&Cell::Empty, &x(), &Cell::Empty]));
    }

    #[test]
    fn multi_on_empty_column() {
        let mut grid = Grid::new(3);
        grid.multi_wire_gate(Cell::gate("BS"), &[0, 1]);
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(
            grid.column(0),
            Some(vec![&Cell::gate("BS"), &Cell::gate("BS"), &Cell::Empty]),
        );
    }

    #[test]
    fn multi_always_advances_on_occupied_column() {
        // wires 0 and 1 are free, but wire 2 is not
        let mut grid = Grid::new(3);
        grid.single_wire_gate(2, x());
        grid.multi_wire_gate(Cell::gate("BS"), &[0, 1]);
        assert_eq!(grid.num_columns(), 2);
        assert_eq!(grid.column(0), Some(vec![&Cell::Empty, &Cell::Empty, &x()]));
        assert_eq!(
            grid.column(1),
            Some(vec![&Cell::gate("BS"), &Cell::gate("BS"), &Cell::Empty]),
        );
    }

    #[test]
    fn controlled_distance_sign() {
        let mut grid = Grid::new(3);
        grid.controlled_pair_gate(0, 2, Cell::Target);
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(
            grid.column(0),
            Some(vec![&Cell::Control(2), &Cell::Empty, &Cell::Target]),
        );

        let mut grid = Grid::new(3);
        grid.controlled_pair_gate(2, 0, Cell::gate("Z"));
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(
            grid.column(0),
            Some(vec![&Cell::gate("Z"), &Cell::Empty, &Cell::Control(-2)]),
        );
    }

    #[test]
    fn controlled_advances_all_wires() {
        let mut grid = Grid::new(3);
        grid.single_wire_gate(0, x());
        grid.controlled_pair_gate(0, 1, Cell::gate("K"));
        assert_eq!(grid.num_columns(), 2);
        assert_eq!(
            grid.column(1),
            Some(vec![&Cell::Control(1), &Cell::gate("K"), &Cell::Empty]),
        );

        // only an uninvolved wire is occupied: reuse
        let mut grid = Grid::new(3);
        grid.single_wire_gate(2, x());
        grid.controlled_pair_gate(0, 1, Cell::Target);
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(
            grid.column(0),
            Some(vec![&Cell::Control(1), &Cell::Target, &x()]),
        );
    }

    #[test]
    fn is_empty() {
        assert!(Grid::is_empty(&Cell::Empty));
        assert!(!Grid::is_empty(&x()));
        assert!(!Grid::is_empty(&Cell::Control(0)));
        assert!(!Grid::is_empty(&Cell::Target));
    }

    #[test]
    fn random_placements_stay_rectangular() {
        const WIRES: usize = 5;
        let mut rng = thread_rng();
        let mut grid = Grid::new(WIRES);
        for _ in 0..500 {
            let a = rng.gen_range(0..WIRES);
            let b = (a + rng.gen_range(1..WIRES)) % WIRES;
            let cols_before = grid.num_columns();
            match rng.gen_range(0..3) {
                0 => grid.single_wire_gate(a, x()),
                1 => grid.multi_wire_gate(Cell::gate("BS"), &[a, b]),
                _ => grid.controlled_pair_gate(a, b, Cell::Target),
            }
            assert!(grid.is_rectangular());
            let cols_after = grid.num_columns();
            assert!(cols_after == cols_before || cols_after == cols_before + 1);
        }
    }
}
