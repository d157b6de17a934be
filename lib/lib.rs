//! This package draws continuous-variable quantum circuits as column-aligned
//! diagrams for the LaTeX [Qcircuit package][qcircuit].
//!
//! - [`gate`] identifies the supported gates from their descriptive names and
//! assigns each one a placement strategy.
//! - [`grid`] lays cells out on a rectangular wire-by-column grid, reusing the
//! rightmost column whenever a gate fits there.
//! - [`circuit`] ties the two together: validated gate events go in, a finished
//! document comes out.
//! - [`markup`] and [`document`] turn a finished grid into text. The markup is
//! a swappable table, with [`Qcircuit`][markup::Qcircuit] as the default.
//!
//! [qcircuit]: https://ctan.org/pkg/qcircuit
//!
//! # Example
//! ```
//! use cv_qcircuit::{ circuit::Circuit, gate::GateKind };
//!
//! let mut circuit = Circuit::new(3);
//! circuit
//!     .apply(GateKind::S, &[0]).unwrap()
//!     .apply(GateKind::S, &[1]).unwrap()
//!     .apply(GateKind::BS, &[0, 1]).unwrap()
//!     .apply(GateKind::CZ, &[1, 2]).unwrap();
//! assert_eq!(circuit.num_columns(), 3);
//! println!("{}", circuit);
//! ```

pub mod circuit;
pub mod document;
pub mod gate;
pub mod grid;
pub mod markup;

pub use circuit::{ Circuit, CircuitError, CircuitResult, GateEvent };
pub use gate::GateKind;
