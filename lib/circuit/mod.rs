use std::{
    fmt,
    fs,
    io::Write,
    path::{ Path, PathBuf },
};
use chrono::Local;
use log::{ debug, info, warn };
use rustc_hash::FxHashSet as HashSet;
use thiserror::Error;
use crate::{
    document::{ self, Spacing },
    gate::{ GateKind, Placement },
    grid::{ Cell, Grid },
    markup::{ Markup, Qcircuit },
};

#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("unsupported operation {0} not printable by circuit drawer")]
    UnsupportedGateKind(String),

    #[error("mode mismatch in {kind}: {expected} mode gate applied to {actual} wire(s)")]
    ModeMismatch { expected: usize, actual: usize, kind: String },

    #[error("wire {0} is out of bounds for a circuit with {1} wire(s)")]
    WireOutOfBounds(usize, usize),

    #[error("wire {0} targeted more than once by a single gate")]
    DuplicateWires(usize),

    #[error("malformed gate event: {0}")]
    MalformedEvent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
pub type CircuitResult<T> = Result<T, CircuitError>;
use CircuitError::*;

pub mod event;
pub use event::GateEvent;

/// Default output directory for [`Circuit::save_document`].
pub const DEFAULT_TEX_DIR: &str = "circuit_tex";

/// A circuit diagram under construction.
///
/// Gates are added one event at a time through [`apply`][Self::apply] or
/// [`dispatch`][Self::dispatch], each of which validates the event fully
/// before touching the underlying [`Grid`]; a rejected event leaves the
/// diagram unchanged. The finished diagram is rendered with the markup `M`.
///
/// # Example
/// ```
/// use cv_qcircuit::circuit::{ Circuit, GateEvent };
///
/// let mut circuit = Circuit::new(2);
/// circuit.dispatch(&"Sgate(0.5) | (q[0])".parse().unwrap()).unwrap();
/// circuit.dispatch(&GateEvent::new("CXgate(1)", [0, 1])).unwrap();
/// assert_eq!(circuit.num_columns(), 2);
/// assert!(circuit.dump_to_document().contains(r"& \ctrl{1}"));
/// ```
#[derive(Clone, Debug)]
pub struct Circuit<M = Qcircuit> {
    grid: Grid,
    spacing: Spacing,
    markup: M,
}

impl Circuit<Qcircuit> {
    /// Create a new, empty circuit on `wires` wires using [`Qcircuit`]
    /// markup.
    pub fn new(wires: usize) -> Self {
        Self { grid: Grid::new(wires), spacing: Spacing::default(), markup: Qcircuit }
    }
}

impl<M> Circuit<M>
where M: Markup
{
    /// Swap out the markup used to render `self`.
    pub fn with_markup<N>(self, markup: N) -> Circuit<N>
    where N: Markup
    {
        Circuit { grid: self.grid, spacing: self.spacing, markup }
    }

    /// Replace all spacing options.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the visual spacing between columns.
    pub fn set_column_spacing(&mut self, value: f64) -> &mut Self {
        self.spacing.column = Some(value);
        self
    }

    /// Set the visual spacing between rows.
    pub fn set_row_spacing(&mut self, value: f64) -> &mut Self {
        self.spacing.row = Some(value);
        self
    }

    /// Return the current spacing options.
    pub fn spacing(&self) -> &Spacing { &self.spacing }

    /// Return a reference to the markup.
    pub fn markup(&self) -> &M { &self.markup }

    /// Return a reference to the underlying grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Return the number of wires.
    pub fn num_wires(&self) -> usize { self.grid.num_wires() }

    /// Return the number of columns.
    pub fn num_columns(&self) -> usize { self.grid.num_columns() }

    fn check_wires(&self, kind: GateKind, descr: &str, wires: &[usize])
        -> CircuitResult<()>
    {
        if wires.len() != kind.arity() {
            return Err(ModeMismatch {
                expected: kind.arity(),
                actual: wires.len(),
                kind: descr.to_string(),
            });
        }
        let n = self.num_wires();
        if let Some(&k) = wires.iter().find(|&&k| k >= n) {
            return Err(WireOutOfBounds(k, n));
        }
        let mut seen: HashSet<usize> = HashSet::default();
        if let Some(&k) = wires.iter().find(|&&k| !seen.insert(k)) {
            return Err(DuplicateWires(k));
        }
        Ok(())
    }

    fn place(&mut self, kind: GateKind, wires: &[usize]) {
        let cell = kind.caption().map(Cell::gate).unwrap_or(Cell::Target);
        match kind.placement() {
            Placement::Single
                => self.grid.single_wire_gate(wires[0], cell),
            Placement::Pair
                => self.grid.multi_wire_gate(cell, wires),
            Placement::Controlled
                => self.grid.controlled_pair_gate(wires[0], wires[1], cell),
        }
    }

    fn apply_described(&mut self, kind: GateKind, descr: &str, wires: &[usize])
        -> CircuitResult<&mut Self>
    {
        if let Err(err) = self.check_wires(kind, descr, wires) {
            warn!("rejected {}: {}", descr, err);
            return Err(err);
        }
        debug!("placing {} on wires {:?}", kind, wires);
        self.place(kind, wires);
        Ok(self)
    }

    /// Apply a gate of known kind to `wires`, given in the order the gate
    /// expects (control first for controlled gates).
    ///
    /// Fails with `ModeMismatch` if the number of wires does not match the
    /// gate's arity, `WireOutOfBounds` if any index is not a wire of `self`,
    /// and `DuplicateWires` if a wire is named twice.
    pub fn apply(&mut self, kind: GateKind, wires: &[usize])
        -> CircuitResult<&mut Self>
    {
        self.apply_described(kind, kind.key(), wires)
    }

    /// Identify and apply the gate described by `event`.
    ///
    /// Fails with `UnsupportedGateKind` if the description names no supported
    /// gate, and otherwise as for [`apply`][Self::apply].
    pub fn dispatch(&mut self, event: &GateEvent) -> CircuitResult<&mut Self> {
        match event.gate_kind() {
            Some(kind) => self.apply_described(kind, &event.kind, &event.wires),
            None => {
                warn!("rejected unsupported gate {}", event.kind);
                Err(UnsupportedGateKind(event.kind.clone()))
            },
        }
    }

    /// Dispatch a sequence of events in order, stopping at the first failure.
    ///
    /// Events before the failing one remain applied.
    pub fn extend_events<'a, I>(&mut self, events: I) -> CircuitResult<&mut Self>
    where I: IntoIterator<Item = &'a GateEvent>
    {
        for event in events.into_iter() {
            self.dispatch(event)?;
        }
        Ok(self)
    }

    /// Render the current diagram as a complete document.
    pub fn dump_to_document(&self) -> String {
        document::render(&self.grid, &self.spacing, &self.markup)
    }

    /// Render the current diagram and write it to `path`, replacing any
    /// existing file.
    pub fn save_document_as<P>(&self, path: P) -> CircuitResult<()>
    where P: AsRef<Path>
    {
        fs::OpenOptions::new()
            .write(true)
            .append(false)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?
            .write_all(self.dump_to_document().as_bytes())?;
        info!("wrote circuit document to {}", path.as_ref().display());
        Ok(())
    }

    /// Render the current diagram and write it to a time-stamped `.tex` file
    /// in `dir`, creating `dir` if needed. Returns the path of the new file.
    pub fn save_document<P>(&self, dir: P) -> CircuitResult<PathBuf>
    where P: AsRef<Path>
    {
        fs::create_dir_all(dir.as_ref())?;
        let name = format!("output_{}.tex", Local::now().format("%Y_%B_%d_%I-%M%p"));
        let path = dir.as_ref().join(name);
        self.save_document_as(&path)?;
        Ok(path)
    }
}

impl<M> fmt::Display for Circuit<M>
where M: Markup
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dump_to_document())
    }
}
