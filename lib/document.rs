//! Serialization of a finished [`Grid`] into a markup document.

use crate::{
    grid::Grid,
    markup::Markup,
};

/// Optional visual spacing between columns and rows.
///
/// Unset values emit no directive.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    pub column: Option<f64>,
    pub row: Option<f64>,
}

impl Spacing {
    /// Set the spacing between columns.
    pub fn with_column(mut self, value: f64) -> Self {
        self.column = Some(value);
        self
    }

    /// Set the spacing between rows.
    pub fn with_row(mut self, value: f64) -> Self {
        self.row = Some(value);
        self
    }

    /// Return `true` if no spacing has been set.
    pub fn is_unset(&self) -> bool { self.column.is_none() && self.row.is_none() }
}

fn pad(s: &str) -> String { format!(" {} ", s) }

/// Render `grid` as a complete document.
///
/// The preamble comes first, then any spacing directives (column before row),
/// then the circuit body. The body is written one wire at a time, each cell
/// wrapped as a wire operation, with a terminator after each wire. Rows are
/// wires and columns are time steps in the output.
pub fn render<M>(grid: &Grid, spacing: &Spacing, markup: &M) -> String
where M: Markup + ?Sized
{
    let mut doc = markup.preamble();
    if let Some(c) = spacing.column {
        doc += &pad(&markup.column_spacing(c));
    }
    if let Some(r) = spacing.row {
        doc += &pad(&markup.row_spacing(r));
    }
    doc += &markup.body_start();
    for wire in grid.wires() {
        for cell in wire.iter() {
            doc += &pad(&markup.wire_operation(&cell.render(markup)));
        }
        doc += &markup.wire_terminator();
    }
    doc += &markup.body_end();
    doc += &markup.document_end();
    doc
}
