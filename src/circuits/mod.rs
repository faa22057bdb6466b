// src/circuits/mod.rs

//! Ordered sequences of [`Operation`]s, built programmatically.
//!
//! A `Circuit` is the typed counterpart of a textual gate program: the
//! parser produces one, the algorithm drivers build one, and
//! [`Circuit::to_program`] renders it back to text.

use crate::gates::{RotationAxis, SingleQubitGate, TwoQubitGate};
use crate::operations::{Operation, SpecialState};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered list of operations over qubits `0..num_qubits()`.
#[derive(Clone, PartialEq, Default)]
pub struct Circuit {
    /// Every qubit index named by some operation.
    qubits: BTreeSet<usize>,
    /// The operations, applied strictly in order.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one operation, registering the qubits it names.
    pub fn add_operation(&mut self, op: Operation) {
        self.qubits.extend(op.involved_qubits());
        self.operations.push(op);
    }

    /// Appends every operation from `ops` in order.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// The set of qubit indices named by the circuit's operations.
    pub fn qubits(&self) -> &BTreeSet<usize> {
        &self.qubits
    }

    /// Smallest register width that holds every named qubit (highest index + 1).
    pub fn num_qubits(&self) -> usize {
        self.qubits.last().map_or(0, |q| q + 1)
    }

    /// The operations in application order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Whitespace-separated program text that parses back to this circuit,
    /// unless a rotation angle is NaN or infinite.
    pub fn to_program(&self) -> String {
        self.operations
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Operation> for Circuit {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        let mut circuit = Circuit::new();
        circuit.add_operations(iter);
        circuit
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Fluent construction of [`Circuit`]s.
///
/// ```
/// use qvis::CircuitBuilder;
///
/// let bell = CircuitBuilder::new().h(0).cnot(0, 1).build();
/// assert_eq!(bell.to_program(), "H0 CNOT01");
/// ```
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Fixed single-qubit gate on `qubit`.
    pub fn gate(self, gate: SingleQubitGate, qubit: usize) -> Self {
        self.add_op(Operation::Single { gate, qubit })
    }

    pub fn x(self, qubit: usize) -> Self {
        self.gate(SingleQubitGate::X, qubit)
    }

    pub fn y(self, qubit: usize) -> Self {
        self.gate(SingleQubitGate::Y, qubit)
    }

    pub fn z(self, qubit: usize) -> Self {
        self.gate(SingleQubitGate::Z, qubit)
    }

    pub fn h(self, qubit: usize) -> Self {
        self.gate(SingleQubitGate::H, qubit)
    }

    pub fn s(self, qubit: usize) -> Self {
        self.gate(SingleQubitGate::S, qubit)
    }

    pub fn t(self, qubit: usize) -> Self {
        self.gate(SingleQubitGate::T, qubit)
    }

    /// Rotation about `axis` by `degrees`.
    pub fn rotate(self, axis: RotationAxis, qubit: usize, degrees: f64) -> Self {
        self.add_op(Operation::Rotation { axis, qubit, degrees })
    }

    pub fn rx(self, qubit: usize, degrees: f64) -> Self {
        self.rotate(RotationAxis::X, qubit, degrees)
    }

    pub fn ry(self, qubit: usize, degrees: f64) -> Self {
        self.rotate(RotationAxis::Y, qubit, degrees)
    }

    pub fn rz(self, qubit: usize, degrees: f64) -> Self {
        self.rotate(RotationAxis::Z, qubit, degrees)
    }

    pub fn cnot(self, control: usize, target: usize) -> Self {
        self.add_op(Operation::TwoQubit { gate: TwoQubitGate::Cnot, first: control, second: target })
    }

    pub fn cz(self, control: usize, target: usize) -> Self {
        self.add_op(Operation::TwoQubit { gate: TwoQubitGate::Cz, first: control, second: target })
    }

    pub fn swap(self, q1: usize, q2: usize) -> Self {
        self.add_op(Operation::TwoQubit { gate: TwoQubitGate::Swap, first: q1, second: q2 })
    }

    /// State directive (`BELL`, `GHZ`, `W`).
    pub fn prepare(self, state: SpecialState) -> Self {
        self.add_op(Operation::Prepare(state))
    }

    /// Applies `gate` to each qubit in `qubits`, in order.
    pub fn on_each(mut self, gate: SingleQubitGate, qubits: impl IntoIterator<Item = usize>) -> Self {
        for qubit in qubits {
            self = self.gate(gate, qubit);
        }
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_qubits = self.num_qubits();
        let ops = &self.operations;
        let num_ops = ops.len();
        writeln!(f, "qvis::Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        if num_ops == 0 || num_qubits == 0 {
            return Ok(());
        }

        let max_label_width = format!("q{}", num_qubits - 1).len();
        let label_padding = " ".repeat(max_label_width + 2);

        const GATE_WIDTH: usize = 9; // e.g. "──RX(90)─"
        const H_WIRE: char = '─';
        const V_WIRE: char = '│';
        let wire: String = H_WIRE.to_string().repeat(GATE_WIDTH);

        // op_grid[row][time] holds the cell text; v_connect[row][time] the
        // connector drawn below that row.
        let mut op_grid: Vec<Vec<String>> = vec![vec![wire.clone(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total = GATE_WIDTH - slen;
                let pre = total / 2;
                let post = total - pre;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
            }
        }

        for (t, op) in ops.iter().enumerate() {
            match op {
                Operation::Single { gate, qubit } => {
                    op_grid[*qubit][t] = format_gate(gate.symbol());
                }
                Operation::Rotation { axis, qubit, degrees } => {
                    op_grid[*qubit][t] = format_gate(&format!("{}({})", axis.symbol(), degrees));
                }
                Operation::TwoQubit { gate, first, second } => {
                    let (first_symbol, second_symbol) = match gate {
                        TwoQubitGate::Cnot => ("@", "X"),
                        TwoQubitGate::Cz => ("@", "●"),
                        TwoQubitGate::Swap => ("x", "x"),
                    };
                    op_grid[*first][t] = format_gate(first_symbol);
                    op_grid[*second][t] = format_gate(second_symbol);
                    let r_min = (*first).min(*second);
                    let r_max = (*first).max(*second);
                    for row in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row[t] = V_WIRE;
                    }
                }
                Operation::Prepare(state) => {
                    for row in op_grid.iter_mut() {
                        row[t] = format_gate(state.keyword());
                    }
                }
            }
        }

        for r in 0..num_qubits {
            let label = format!("q{}: ", r);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let pad = GATE_WIDTH - 1;
                    let pre = pad / 2;
                    write!(f, "{}{}{}", " ".repeat(pre), v_connect[r][t], " ".repeat(pad - pre))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_tracks_qubits_and_width() {
        let circuit = CircuitBuilder::new().h(0).cnot(0, 3).rx(1, 45.0).build();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.qubits().iter().copied().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn to_program_joins_tokens() {
        let circuit = CircuitBuilder::new()
            .on_each(SingleQubitGate::H, 0..2)
            .cz(1, 0)
            .rz(0, 180.0)
            .prepare(SpecialState::W)
            .build();
        assert_eq!(circuit.to_program(), "H0 H1 CZ10 RZ0(180) W");
    }

    #[test]
    fn empty_circuit_display() {
        let circuit = Circuit::new();
        assert!(circuit.is_empty());
        assert_eq!(circuit.to_string(), "qvis::Circuit[0 operations on 0 qubits]\n");
    }

    #[test]
    fn diagram_has_one_row_per_qubit() {
        let circuit = CircuitBuilder::new().h(0).cnot(0, 2).build();
        let text = circuit.to_string();
        assert!(text.contains("q0: "));
        assert!(text.contains("q1: "));
        assert!(text.contains("q2: "));
        assert!(text.contains('@'));
        assert!(text.contains('│'));
    }
}
