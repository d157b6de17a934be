//! The fixed set of drawable continuous-variable gates.
//!
//! Gates arrive from the circuit model as descriptive strings such as
//! `"Sgate(0.5) | (q[0])"`. [`GateKind::classify`] turns such a string into a
//! tag by substring matching against a static table, after which nothing else
//! in the crate needs to look at the string again.

use std::str::FromStr;
use crate::circuit::CircuitError;

/// Separator between the operator and register parts of a descriptive gate
/// string.
pub(crate) const PIPE: char = '|';

/// How a gate occupies the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// One labeled box on a single wire.
    Single,
    /// The same labeled box on each of two wires.
    Pair,
    /// A control marker on the first wire and a target on the second.
    Controlled,
}

impl Placement {
    /// Number of wires a gate with this placement must be applied to.
    pub fn arity(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Pair | Self::Controlled => 2,
        }
    }
}

/// A supported gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Position displacement.
    X,
    /// Momentum displacement.
    Z,
    /// Displacement.
    D,
    /// Squeezing.
    S,
    /// Rotation.
    R,
    /// Quadratic phase.
    P,
    /// Cubic phase.
    V,
    /// Kerr interaction.
    K,
    /// Fourier transform.
    Fourier,
    /// Beamsplitter.
    BS,
    /// Two-mode squeezing.
    S2,
    /// Controlled position displacement.
    CX,
    /// Controlled phase.
    CZ,
    /// Controlled Kerr interaction.
    CK,
}

impl GateKind {
    /// Two-wire gates, matched first. Table order is match order.
    pub const TWO_WIRE: [Self; 5] = [
        Self::CX, Self::CZ, Self::CK, Self::BS, Self::S2,
    ];

    /// Single-wire gates, matched only if no two-wire key is found.
    pub const SINGLE_WIRE: [Self; 9] = [
        Self::X, Self::Z, Self::D, Self::S, Self::R,
        Self::P, Self::V, Self::K, Self::Fourier,
    ];

    /// Substring identifying `self` in a descriptive gate string.
    ///
    /// Keys are case-sensitive.
    pub fn key(&self) -> &'static str {
        match self {
            Self::X => "Xgate",
            Self::Z => "Zgate",
            Self::D => "Dgate",
            Self::S => "Sgate",
            Self::R => "Rgate",
            Self::P => "Pgate",
            Self::V => "Vgate",
            Self::K => "Kgate",
            Self::Fourier => "Fourier",
            Self::BS => "BSgate",
            Self::S2 => "S2gate",
            Self::CX => "CXgate",
            Self::CZ => "CZgate",
            Self::CK => "CKgate",
        }
    }

    /// Return the placement strategy for `self`.
    pub fn placement(&self) -> Placement {
        match self {
            Self::BS | Self::S2 => Placement::Pair,
            Self::CX | Self::CZ | Self::CK => Placement::Controlled,
            _ => Placement::Single,
        }
    }

    /// Return the number of wires `self` must be applied to.
    pub fn arity(&self) -> usize { self.placement().arity() }

    /// Return `true` if `self` is drawn with a control marker.
    pub fn is_controlled(&self) -> bool {
        matches!(self.placement(), Placement::Controlled)
    }

    /// Caption of the gate box drawn for `self`, or `None` for gates whose
    /// target is drawn as a bare target symbol.
    pub fn caption(&self) -> Option<&'static str> {
        match self {
            Self::X => Some("X"),
            Self::Z | Self::CZ => Some("Z"),
            Self::D => Some("D"),
            Self::S | Self::S2 => Some("S"),
            Self::R => Some("R"),
            Self::P => Some("P"),
            Self::V => Some("V"),
            Self::K | Self::CK => Some("K"),
            Self::Fourier => Some("F"),
            Self::BS => Some("BS"),
            Self::CX => None,
        }
    }

    /// Identify the gate named in a descriptive string.
    ///
    /// Only the part of `descr` before the first `|` is considered, and a key
    /// may appear anywhere inside it, so `"Sgate(0.5) | (q[0])"` is a
    /// squeezing gate. Two-wire keys take precedence over single-wire keys;
    /// `"CXgate"` is never read as `"Xgate"`.
    pub fn classify(descr: &str) -> Option<Self> {
        let operator = descr.split(PIPE).next().unwrap_or(descr);
        Self::TWO_WIRE.iter()
            .chain(Self::SINGLE_WIRE.iter())
            .find(|kind| operator.contains(kind.key()))
            .copied()
    }
}

impl FromStr for GateKind {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s)
            .ok_or_else(|| CircuitError::UnsupportedGateKind(s.to_string()))
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
