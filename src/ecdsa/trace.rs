//! Step-by-step records of signature verification
//!
//! A [`VerifyTrace`] is the presentation-friendly form of the verification
//! equation: every intermediate quantity, in the order it was computed,
//! followed by the verdict. The trace is produced by the same stepped core
//! that powers the boolean [`Ecdsa::verify`](super::Ecdsa::verify), so the
//! two can never disagree about an input.

use num_bigint::BigUint;

use crate::curve::Point;

/// One recorded step of the verification equation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyStep {
    /// Step 0: confirm 1 ≤ r, s ≤ q-1
    RangeCheck {
        /// Signature component r
        r: BigUint,
        /// Signature component s
        s: BigUint,
        /// Generator order the components are checked against
        q: BigUint,
        /// Whether both components were in range
        ok: bool,
    },
    /// The message digest reduced into the scalar field: z = H(M) mod q
    Digest {
        /// Reduced digest
        z: BigUint,
    },
    /// Step 1: w = s⁻¹ mod q
    InverseOfS {
        /// Signature component s
        s: BigUint,
        /// Its inverse w
        w: BigUint,
    },
    /// Step 2: u₁ = z·w mod q and u₂ = r·w mod q
    Coefficients {
        /// u₁
        u1: BigUint,
        /// u₂
        u2: BigUint,
    },
    /// Step 3: X = u₁·G + u₂·Q
    Combination {
        /// u₁·G
        u1_g: Point,
        /// u₂·Q
        u2_q: Point,
        /// The combined point X
        x: Point,
    },
    /// Step 4: compare X.x mod q against r
    Comparison {
        /// X.x reduced mod q
        x_mod_q: BigUint,
        /// Signature component r
        r: BigUint,
        /// Whether the two matched
        ok: bool,
    },
}

/// Why a verification was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// r or s fell outside [1, q-1]
    OutOfRange,
    /// s has no inverse mod q
    NoInverse,
    /// u₁·G + u₂·Q collapsed to the point at infinity
    IdentityResult,
    /// X.x mod q did not equal r
    Mismatch,
}

/// Outcome of a verification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The signature is valid for the message and public key
    Accepted,
    /// The signature was rejected, with the step that rejected it
    Rejected(RejectReason),
}

/// The ordered record produced by a detailed verification
#[derive(Clone, Debug)]
pub struct VerifyTrace {
    steps: Vec<VerifyStep>,
    verdict: Verdict,
}

impl VerifyTrace {
    pub(super) fn new(steps: Vec<VerifyStep>, verdict: Verdict) -> Self {
        VerifyTrace { steps, verdict }
    }

    /// Recorded steps, in computation order. Rejection short-circuits the
    /// record the same way it short-circuits the boolean algorithm.
    pub fn steps(&self) -> &[VerifyStep] {
        &self.steps
    }

    /// Final verdict
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Did the signature verify?
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// Sink for verification steps. The boolean verifier plugs in [`Discard`],
/// which never even builds the step values; the detailed verifier collects
/// into a `Vec`.
pub(super) trait StepSink {
    fn record(&mut self, step: impl FnOnce() -> VerifyStep);
}

pub(super) struct Discard;

impl StepSink for Discard {
    fn record(&mut self, _step: impl FnOnce() -> VerifyStep) {}
}

impl StepSink for Vec<VerifyStep> {
    fn record(&mut self, step: impl FnOnce() -> VerifyStep) {
        self.push(step());
    }
}
