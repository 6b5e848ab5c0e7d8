//! Text rendering of circuits.
//!
//! Operations are packed into columns: each one lands in the earliest
//! column where every wire it spans is free. Single-qubit gates and
//! measurements are boxed, controls are drawn `●`, CX targets `⊕`, swap
//! ends `×`, and wires crossed by a two-qubit gate show `│`:
//!
//! ```text
//! q0: [H]──●──[M:c0]──
//! q1: ─────⊕──[M:c1]──
//! ```

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::operation::Operation;

const WIRE: char = '─';
const MIN_SLOT_WIDTH: usize = 3;

/// What one qubit shows in one column.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// Single-qubit gate or measurement, drawn in brackets.
    Boxed(String),
    /// Control of a controlled gate.
    Control,
    /// Target of a CX.
    Target,
    /// End of a swap.
    SwapEnd,
    /// Wire crossed by a gate on non-adjacent qubits.
    Wire,
}

impl Slot {
    fn symbol(&self) -> String {
        match self {
            Slot::Boxed(label) => format!("[{label}]"),
            Slot::Control => "●".to_string(),
            Slot::Target => "⊕".to_string(),
            Slot::SwapEnd => "×".to_string(),
            Slot::Wire => "│".to_string(),
        }
    }
}

/// One slot per qubit.
type Column = Vec<Option<Slot>>;

/// Render `circuit` as a multi-line diagram with one row per qubit.
pub fn draw(circuit: &Circuit) -> String {
    let n = circuit.num_qubits() as usize;
    let columns = build_columns(circuit, n);
    let label_width = format!("q{}: ", n.saturating_sub(1)).len();

    let mut lines: Vec<String> = (0..n)
        .map(|q| format!("{:>label_width$}", format!("q{q}: ")))
        .collect();

    for (i, column) in columns.iter().enumerate() {
        let symbols: Vec<Option<String>> = column
            .iter()
            .map(|slot| slot.as_ref().map(Slot::symbol))
            .collect();
        let width = symbols
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_SLOT_WIDTH);

        for (line, symbol) in lines.iter_mut().zip(&symbols) {
            line.push_str(&center_with_wire(symbol.as_deref().unwrap_or(""), width));
            if i + 1 < columns.len() {
                line.push(WIRE);
            }
        }
    }

    for line in &mut lines {
        line.push(WIRE);
        line.push(WIRE);
    }
    lines.join("\n")
}

/// Group operations into columns by the wires they span.
fn build_columns(circuit: &Circuit, n: usize) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    let mut next_free = vec![0usize; n];

    for op in circuit.operations() {
        let placed = slots(op, n);
        let Some(lo) = placed.iter().position(Option::is_some) else {
            continue;
        };
        let hi = placed.iter().rposition(Option::is_some).unwrap_or(lo);

        let col = next_free[lo..=hi].iter().copied().max().unwrap_or(0);
        if columns.len() <= col {
            columns.resize_with(col + 1, || vec![None; n]);
        }
        for (q, slot) in placed.into_iter().enumerate() {
            if slot.is_some() {
                columns[col][q] = slot;
            }
        }
        for free in &mut next_free[lo..=hi] {
            *free = col + 1;
        }
    }

    columns
}

fn slots(op: &Operation, n: usize) -> Column {
    let mut slots: Column = vec![None; n];
    match op {
        Operation::Gate { gate, qubits } => match (gate, qubits.as_slice()) {
            (StandardGate::CX, [c, t]) => {
                cross(&mut slots, c.index(), t.index());
                slots[c.index()] = Some(Slot::Control);
                slots[t.index()] = Some(Slot::Target);
            }
            (StandardGate::CZ, [a, b]) => {
                cross(&mut slots, a.index(), b.index());
                slots[a.index()] = Some(Slot::Control);
                slots[b.index()] = Some(Slot::Control);
            }
            (StandardGate::Swap, [a, b]) => {
                cross(&mut slots, a.index(), b.index());
                slots[a.index()] = Some(Slot::SwapEnd);
                slots[b.index()] = Some(Slot::SwapEnd);
            }
            _ => {
                for q in qubits {
                    slots[q.index()] = Some(Slot::Boxed(gate.label()));
                }
            }
        },
        Operation::Measure { qubit, clbit } => {
            slots[qubit.index()] = Some(Slot::Boxed(format!("M:{clbit}")));
        }
        Operation::MeasureAll => {
            for (q, slot) in slots.iter_mut().enumerate() {
                *slot = Some(Slot::Boxed(format!("M:c{q}")));
            }
        }
    }
    slots
}

/// Mark the wires strictly between `a` and `b` as crossed.
fn cross(slots: &mut [Option<Slot>], a: usize, b: usize) {
    let (lo, hi) = (a.min(b), a.max(b));
    for slot in slots.iter_mut().take(hi).skip(lo + 1) {
        *slot = Some(Slot::Wire);
    }
}

fn center_with_wire(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.chars().count());
    let left = pad / 2;
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(WIRE, left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(WIRE, pad - left));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::{ClbitId, QubitId};

    #[test]
    fn test_draw_bell() {
        let circuit = Circuit::bell().unwrap();
        let expected = "q0: [H]──●──[M:c0]──\nq1: ─────⊕──[M:c1]──";
        assert_eq!(circuit.draw(), expected);
        assert_eq!(circuit.to_string(), expected);
    }

    #[test]
    fn test_draw_empty() {
        let circuit = Circuit::new(2, 0).unwrap();
        assert_eq!(circuit.draw(), "q0: ──\nq1: ──");
    }

    #[test]
    fn test_draw_packs_independent_gates() {
        let mut circuit = Circuit::new(2, 0).unwrap();
        circuit.h(QubitId(0)).unwrap().x(QubitId(1)).unwrap();
        assert_eq!(circuit.draw(), "q0: [H]──\nq1: [X]──");
    }

    #[test]
    fn test_draw_crossing_wire() {
        let mut circuit = Circuit::new(3, 0).unwrap();
        circuit.cx(QubitId(0), QubitId(2)).unwrap();
        circuit.h(QubitId(1)).unwrap();
        let drawing = circuit.draw();
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines, ["q0: ─●───────", "q1: ─│──[H]──", "q2: ─⊕───────"]);
    }

    #[test]
    fn test_draw_cz_and_swap() {
        let mut circuit = Circuit::new(2, 0).unwrap();
        circuit
            .cz(QubitId(0), QubitId(1))
            .unwrap()
            .swap(QubitId(0), QubitId(1))
            .unwrap();
        assert_eq!(circuit.draw(), "q0: ─●──×───\nq1: ─●──×───");
    }

    #[test]
    fn test_draw_measure_and_rotation() {
        let mut circuit = Circuit::new(1, 1).unwrap();
        circuit.rz(0.5, QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        assert_eq!(circuit.draw(), "q0: [RZ(0.500)]─[M:c0]──");
    }

    #[test]
    fn test_draw_label_alignment() {
        let circuit = Circuit::new(11, 0).unwrap();
        let drawing = circuit.draw();
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines[0], " q0: ──");
        assert_eq!(lines[10], "q10: ──");
    }
}
