//! Template tables mapping each semantic role in a diagram to concrete markup.
//!
//! The layout engine only ever deals in [`Cell`][crate::grid::Cell]s; all text
//! comes from an implementation of [`Markup`]. [`Qcircuit`] targets the LaTeX
//! [Qcircuit package][qcircuit].
//!
//! [qcircuit]: https://ctan.org/pkg/qcircuit

/// Formatting table for a diagram document.
///
/// Each method produces the text for one role. Implementations may target any
/// typesetting syntax; the layout algorithm does not depend on the output.
pub trait Markup {
    /// A unit segment of wire with nothing on it.
    fn empty_wire(&self) -> String;

    /// A box with a caption.
    fn gate_box(&self, caption: &str) -> String;

    /// Control marker with a vertical connector reaching `distance` rows
    /// (negative is upward).
    fn control(&self, distance: isize) -> String;

    /// Target symbol of a controlled displacement.
    fn target(&self) -> String;

    /// Wrap a rendered cell for placement on a wire.
    fn wire_operation(&self, cell: &str) -> String;

    /// Terminates one wire (row).
    fn wire_terminator(&self) -> String;

    /// Column spacing directive.
    fn column_spacing(&self, value: f64) -> String;

    /// Row spacing directive.
    fn row_spacing(&self, value: f64) -> String;

    /// Opening of the document, up to where spacing directives may appear.
    fn preamble(&self) -> String;

    /// Opens the circuit body.
    fn body_start(&self) -> String;

    /// Closes the circuit body.
    fn body_end(&self) -> String;

    /// Closes the document.
    fn document_end(&self) -> String;
}

pub const DOCUMENT_CLASS: &str = r"\documentclass{article}";
pub const QCIRCUIT_PACKAGE: &str = r"\usepackage{qcircuit}";
pub const CIRCUIT_START: &str = r"\Qcircuit";
pub const DOCUMENT_END: &str = r"\end{document}";
pub const CIRCUIT_BODY_START: &str = " {\n";
pub const CIRCUIT_BODY_TERMINATOR: &str = "\n}\n";
pub const WIRE_TERMINATOR: &str = "\\\\\n";
pub const TARGET: &str = r"\targ";

/// Qcircuit markup for LaTeX.
///
/// Empty cells are one unit of `\qw`, gates are `\gate{..}` boxes, and
/// controls are `\ctrl{d}` with the signed row offset of their target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Qcircuit;

impl Markup for Qcircuit {
    fn empty_wire(&self) -> String { r"\qw[1]".to_string() }

    fn gate_box(&self, caption: &str) -> String {
        format!(r"\gate{{{}}}", caption)
    }

    fn control(&self, distance: isize) -> String {
        format!(r"\ctrl{{{}}}", distance)
    }

    fn target(&self) -> String { TARGET.to_string() }

    fn wire_operation(&self, cell: &str) -> String { format!("& {}", cell) }

    fn wire_terminator(&self) -> String { WIRE_TERMINATOR.to_string() }

    fn column_spacing(&self, value: f64) -> String { format!("@C={}", value) }

    fn row_spacing(&self, value: f64) -> String { format!("@R={}", value) }

    fn preamble(&self) -> String {
        format!("{}\n{}\n{}", DOCUMENT_CLASS, QCIRCUIT_PACKAGE, CIRCUIT_START)
    }

    fn body_start(&self) -> String { CIRCUIT_BODY_START.to_string() }

    fn body_end(&self) -> String { CIRCUIT_BODY_TERMINATOR.to_string() }

    fn document_end(&self) -> String { DOCUMENT_END.to_string() }
}
