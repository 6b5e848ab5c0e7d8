//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

use qharness_ir::{QubitId, StandardGate};

/// Probabilities below this are treated as zero when measuring.
const PROB_EPSILON: f64 = 1e-12;

/// A statevector over `num_qubits` qubits.
///
/// Qubit `q` is bit `q` of the amplitude index (little-endian).
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// # Panics
    ///
    /// Panics if `2^num_qubits` does not fit in `usize`.
    pub fn new(num_qubits: usize) -> Self {
        let size = u32::try_from(num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .unwrap_or_else(|| panic!("{num_qubits} qubits exceed the addressable statevector size"));
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply a gate to the given qubits.
    ///
    /// `qubits` must match the gate's arity and lie within the register;
    /// circuits built through the IR guarantee both.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[QubitId]) {
        let q = |i: usize| qubits[i].index();
        match *gate {
            // Single-qubit gates
            StandardGate::I => {}
            StandardGate::X => self.apply_x(q(0)),
            StandardGate::Y => self.apply_y(q(0)),
            StandardGate::Z => self.apply_z(q(0)),
            StandardGate::H => self.apply_h(q(0)),
            StandardGate::S => self.apply_phase(q(0), FRAC_PI_2),
            StandardGate::Sdg => self.apply_phase(q(0), -FRAC_PI_2),
            StandardGate::T => self.apply_phase(q(0), FRAC_PI_4),
            StandardGate::Tdg => self.apply_phase(q(0), -FRAC_PI_4),
            StandardGate::SX => self.apply_sx(q(0), false),
            StandardGate::SXdg => self.apply_sx(q(0), true),
            StandardGate::Rx(theta) => self.apply_rx(q(0), theta),
            StandardGate::Ry(theta) => self.apply_ry(q(0), theta),
            StandardGate::Rz(theta) => self.apply_rz(q(0), theta),

            // Two-qubit gates
            StandardGate::CX => self.apply_cx(q(0), q(1)),
            StandardGate::CZ => self.apply_cz(q(0), q(1)),
            StandardGate::Swap => self.apply_swap(q(0), q(1)),
        }
    }

    /// Probability of reading `1` on `qubit`.
    pub fn probability_one(&self, qubit: usize) -> f64 {
        let mask = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum()
    }

    /// Measure `qubit` in the computational basis.
    ///
    /// Draws the outcome with Born-rule probability, then collapses and
    /// renormalises the state.
    pub fn measure<R: Rng>(&mut self, qubit: usize, rng: &mut R) -> bool {
        let mut p1 = self.probability_one(qubit);
        if p1 < PROB_EPSILON {
            p1 = 0.0;
        } else if p1 > 1.0 - PROB_EPSILON {
            p1 = 1.0;
        }

        let r: f64 = rng.r#gen();
        let outcome = r < p1;
        let p = if outcome { p1 } else { 1.0 - p1 };

        let mask = 1 << qubit;
        let norm = p.sqrt();
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) == outcome {
                *amp /= norm;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        outcome
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        self.apply_phase(qubit, std::f64::consts::PI);
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = FRAC_1_SQRT_2 * (a + b);
                self.amplitudes[j] = FRAC_1_SQRT_2 * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    fn apply_sx(&mut self, qubit: usize, inverse: bool) {
        let mask = 1 << qubit;
        let sign = if inverse { -1.0 } else { 1.0 };
        let p = Complex64::new(0.5, 0.5 * sign);
        let m = Complex64::new(0.5, -0.5 * sign);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = p * a + m * b;
                self.amplitudes[j] = m * a + p * b;
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= if i & mask == 0 { phase_0 } else { phase_1 };
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1 << control) | (1 << target);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert_eq!(sv.num_qubits(), 2);
        assert!(approx_eq(sv.amplitudes()[0], c(1.0, 0.0)));
        assert!(sv.amplitudes()[1..].iter().all(|a| approx_eq(*a, c(0.0, 0.0))));
    }

    #[test]
    #[should_panic(expected = "exceed the addressable statevector size")]
    fn test_unaddressable_size_panics() {
        let _ = Statevector::new(usize::BITS as usize);
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(&StandardGate::H, &[QubitId(0)]);
        assert!(approx_eq(sv.amplitudes()[0], c(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], c(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::H, &[QubitId(0)]);
        sv.apply_gate(&StandardGate::CX, &[QubitId(0), QubitId(1)]);

        assert!(approx_eq(sv.amplitudes()[0], c(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], c(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[2], c(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[3], c(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_little_endian_indexing() {
        let mut sv = Statevector::new(3);
        sv.apply_gate(&StandardGate::X, &[QubitId(1)]);
        assert!(approx_eq(sv.amplitudes()[0b010], c(1.0, 0.0)));
        assert!((sv.probability_one(1) - 1.0).abs() < 1e-12);
        assert!(sv.probability_one(0).abs() < 1e-12);
    }

    #[test]
    fn test_sx_squared_is_x() {
        let mut sv = Statevector::new(1);
        sv.apply_gate(&StandardGate::SX, &[QubitId(0)]);
        sv.apply_gate(&StandardGate::SX, &[QubitId(0)]);
        assert!(approx_eq(sv.amplitudes()[1], c(1.0, 0.0)));

        sv.apply_gate(&StandardGate::SXdg, &[QubitId(0)]);
        sv.apply_gate(&StandardGate::SXdg, &[QubitId(0)]);
        assert!(approx_eq(sv.amplitudes()[0], c(1.0, 0.0)));
    }

    #[test]
    fn test_swap_and_cz() {
        let mut sv = Statevector::new(2);
        sv.apply_gate(&StandardGate::X, &[QubitId(0)]);
        sv.apply_gate(&StandardGate::Swap, &[QubitId(0), QubitId(1)]);
        assert!(approx_eq(sv.amplitudes()[0b10], c(1.0, 0.0)));

        sv.apply_gate(&StandardGate::X, &[QubitId(0)]);
        sv.apply_gate(&StandardGate::CZ, &[QubitId(0), QubitId(1)]);
        assert!(approx_eq(sv.amplitudes()[0b11], c(-1.0, 0.0)));
    }

    #[test]
    fn test_measure_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sv = Statevector::new(1);
        assert!(!sv.measure(0, &mut rng));

        sv.apply_gate(&StandardGate::X, &[QubitId(0)]);
        for _ in 0..100 {
            assert!(sv.measure(0, &mut rng));
        }
    }

    #[test]
    fn test_measure_collapses_bell_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut sv = Statevector::new(2);
            sv.apply_gate(&StandardGate::H, &[QubitId(0)]);
            sv.apply_gate(&StandardGate::CX, &[QubitId(0), QubitId(1)]);

            let first = sv.measure(0, &mut rng);
            let norm: f64 = sv.amplitudes().iter().map(|a| a.norm_sqr()).sum();
            assert!((norm - 1.0).abs() < 1e-10);
            // The partner qubit is now determined.
            assert_eq!(sv.measure(1, &mut rng), first);
        }
    }
}
