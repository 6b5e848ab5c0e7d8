//! Single-qubit unitary matrices.
//!
//! Used to check that decompositions agree with the gates they replace.

use num_complex::Complex64;
use qharness_ir::StandardGate;
use std::f64::consts::FRAC_1_SQRT_2;

/// Tolerance for floating point comparisons.
const EPSILON: f64 = 1e-10;

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

impl Unitary2x2 {
    /// Create a new 2x2 unitary matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(ONE, ZERO, ZERO, ONE)
    }

    fn diagonal(phase: f64) -> Self {
        Self::new(ONE, ZERO, ZERO, Complex64::from_polar(1.0, phase))
    }

    /// Create a Hadamard matrix.
    pub fn h() -> Self {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Self::new(s, s, s, -s)
    }

    /// Create a Pauli-X matrix.
    pub fn x() -> Self {
        Self::new(ZERO, ONE, ONE, ZERO)
    }

    /// Create a Pauli-Y matrix.
    pub fn y() -> Self {
        Self::new(ZERO, Complex64::new(0.0, -1.0), Complex64::new(0.0, 1.0), ZERO)
    }

    /// Create a Pauli-Z matrix.
    pub fn z() -> Self {
        Self::new(ONE, ZERO, ZERO, -ONE)
    }

    /// Create an S gate (sqrt(Z)).
    pub fn s() -> Self {
        Self::diagonal(std::f64::consts::FRAC_PI_2)
    }

    /// Create an S-dagger gate.
    pub fn sdg() -> Self {
        Self::diagonal(-std::f64::consts::FRAC_PI_2)
    }

    /// Create a T gate (fourth root of Z).
    pub fn t() -> Self {
        Self::diagonal(std::f64::consts::FRAC_PI_4)
    }

    /// Create a T-dagger gate.
    pub fn tdg() -> Self {
        Self::diagonal(-std::f64::consts::FRAC_PI_4)
    }

    /// Create an SX gate (sqrt(X)).
    pub fn sx() -> Self {
        let half = Complex64::new(0.5, 0.0);
        let half_i = Complex64::new(0.0, 0.5);
        Self::new(half + half_i, half - half_i, half - half_i, half + half_i)
    }

    /// Create an SX-dagger gate.
    pub fn sxdg() -> Self {
        Self::sx().dagger()
    }

    /// Create an RX rotation matrix.
    pub fn rx(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new(0.0, -(theta / 2.0).sin());
        Self::new(c, s, s, c)
    }

    /// Create an RY rotation matrix.
    pub fn ry(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RZ rotation matrix.
    pub fn rz(theta: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, -theta / 2.0),
            ZERO,
            ZERO,
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// Matrix of a single-qubit gate, `None` for multi-qubit gates.
    pub fn from_gate(gate: &StandardGate) -> Option<Self> {
        Some(match *gate {
            StandardGate::I => Self::identity(),
            StandardGate::X => Self::x(),
            StandardGate::Y => Self::y(),
            StandardGate::Z => Self::z(),
            StandardGate::H => Self::h(),
            StandardGate::S => Self::s(),
            StandardGate::Sdg => Self::sdg(),
            StandardGate::T => Self::t(),
            StandardGate::Tdg => Self::tdg(),
            StandardGate::SX => Self::sx(),
            StandardGate::SXdg => Self::sxdg(),
            StandardGate::Rx(theta) => Self::rx(theta),
            StandardGate::Ry(theta) => Self::ry(theta),
            StandardGate::Rz(theta) => Self::rz(theta),
            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => return None,
        })
    }

    /// Product of gates applied left to right, `None` if any gate is
    /// multi-qubit.
    pub fn from_sequence<'a>(gates: impl IntoIterator<Item = &'a StandardGate>) -> Option<Self> {
        gates
            .into_iter()
            .try_fold(Self::identity(), |acc, gate| Some(Self::from_gate(gate)? * acc))
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Check if this is approximately identity (up to global phase).
    pub fn is_identity(&self) -> bool {
        let [a, b, c, d] = self.data;
        if b.norm() > EPSILON || c.norm() > EPSILON {
            return false;
        }
        (a - d).norm() < EPSILON && (a.norm() - 1.0).abs() < EPSILON
    }

    /// Check if `self` and `other` differ only by a global phase.
    pub fn equiv_up_to_phase(&self, other: &Self) -> bool {
        (self.dagger() * *other).is_identity()
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2x2::mul(&self, &rhs)
    }
}
