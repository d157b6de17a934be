//! Gate-application events as supplied by a circuit model.

use std::str::FromStr;
use crate::{
    circuit::{ CircuitError, CircuitResult },
    gate::{ GateKind, PIPE },
};

use CircuitError::*;

/// One gate applied to an ordered list of wires.
///
/// `kind` is a free-form descriptive string; only a recognizable gate key
/// somewhere inside it is required (see [`GateKind::classify`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateEvent {
    pub kind: String,
    pub wires: Vec<usize>,
}

impl GateEvent {
    /// Create a new event.
    pub fn new<S, I>(kind: S, wires: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = usize>,
    {
        Self { kind: kind.into(), wires: wires.into_iter().collect() }
    }

    /// Create a new event from an already-identified gate.
    pub fn from_kind<I>(kind: GateKind, wires: I) -> Self
    where I: IntoIterator<Item = usize>
    {
        Self::new(kind.key(), wires)
    }

    /// Parse an event from an `"Op(args) | (q[i], q[j])"` description.
    ///
    /// The part before `|` becomes `kind` (trimmed) and every bracketed index
    /// after it becomes a wire, in order. A single register may be written
    /// without parentheses, e.g. `"Dgate(0.5) | q[1]"`.
    pub fn parse(descr: &str) -> CircuitResult<Self> {
        let malformed = || MalformedEvent(descr.to_string());
        let (op, regs) = descr.split_once(PIPE).ok_or_else(malformed)?;
        let wires: Vec<usize> =
            regs.split('[')
            .skip(1)
            .map(|chunk| {
                chunk.split_once(']')
                    .and_then(|(idx, _)| idx.trim().parse::<usize>().ok())
                    .ok_or_else(malformed)
            })
            .collect::<CircuitResult<_>>()?;
        if wires.is_empty() { return Err(malformed()); }
        Ok(Self { kind: op.trim().to_string(), wires })
    }

    /// Identify the gate named by `self`, if supported.
    pub fn gate_kind(&self) -> Option<GateKind> { GateKind::classify(&self.kind) }
}

impl FromStr for GateEvent {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl From<(GateKind, &[usize])> for GateEvent {
    fn from(event: (GateKind, &[usize])) -> Self {
        Self::from_kind(event.0, event.1.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single() {
        let event = GateEvent::parse("Sgate(0.5) | (q[0])").unwrap();
        assert_eq!(event.kind, "Sgate(0.5)");
        assert_eq!(event.wires, vec![0]);
        assert_eq!(event.gate_kind(), Some(GateKind::S));

        let event: GateEvent = "Dgate(0.5) | q[3]".parse().unwrap();
        assert_eq!(event, GateEvent::new("Dgate(0.5)", [3]));
    }

    #[test]
    fn parse_pair() {
        let event = GateEvent::parse("CXgate(1) | (q[0], q[2])").unwrap();
        assert_eq!(event.kind, "CXgate(1)");
        assert_eq!(event.wires, vec![0, 2]);
        assert_eq!(event.gate_kind(), Some(GateKind::CX));

        let event = GateEvent::parse("BSgate(0.7854, 0) | (q[ 2 ], q[1])").unwrap();
        assert_eq!(event.wires, vec![2, 1]);
    }

    #[test]
    fn parse_malformed() {
        assert!(matches!(GateEvent::parse("Xgate(1)"), Err(MalformedEvent(_))));
        assert!(matches!(GateEvent::parse("Xgate(1) | ()"), Err(MalformedEvent(_))));
        assert!(matches!(GateEvent::parse("Xgate(1) | (q[a])"), Err(MalformedEvent(_))));
        assert!(matches!(GateEvent::parse("Xgate(1) | (q[-1])"), Err(MalformedEvent(_))));
        assert!(matches!(GateEvent::parse("Xgate(1) | (q[0)"), Err(MalformedEvent(_))));
    }

    #[test]
    fn unsupported_still_parses() {
        let event = GateEvent::parse("MeasureFock() | (q[0])").unwrap();
        assert_eq!(event.gate_kind(), None);
    }

    #[test]
    fn from_kind() {
        let event = GateEvent::from((GateKind::CZ, [1, 0].as_slice()));
        assert_eq!(event.kind, "CZgate");
        assert_eq!(event.wires, vec![1, 0]);
    }
}
