//! The ECDSA protocol: key generation, signing, and verification
//!
//! The engine borrows an immutable [`Curve`] and keeps no other state; each
//! operation is a pure function of its inputs plus the randomness it draws.
//! Hashing (SHA-256 via the `sha2` crate) and randomness (any
//! `CryptoRng + RngCore`) are consumed as external collaborators, never
//! owned.
//!
//! Signing follows the textbook algorithm:
//!
//! 1. z = H(M) mod q
//! 2. draw a nonce k uniformly from [1, q-1]
//! 3. R = k·G, r = R.x mod q; retry if r = 0
//! 4. s = k⁻¹(z + r·d) mod q; retry if s = 0 or gcd(s, q) ≠ 1
//!
//! On the small teaching curves this crate targets, q is often composite, so
//! step 4's gcd rejection fires routinely; the retry loop is bounded by
//! [`MAX_SIGN_ATTEMPTS`] and exhaustion is reported as an error instead of a
//! degenerate signature.
//!
//! # Digest bias
//!
//! `hash_message` reduces the full 256-bit digest directly mod q. For small
//! q this is measurably biased compared to rejection sampling; the reduction
//! is kept deliberately because every worked example that ships with the
//! crate (and the files already written by it) depends on the exact mapping.

pub mod trace;


use core::fmt;

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

use crate::curve::arith::{mod_add, mod_inverse, mod_mul};
use crate::curve::{Curve, Point};
use crate::error::{Error, Result};
use self::trace::{Discard, RejectReason, StepSink, Verdict, VerifyStep, VerifyTrace};

/// Upper bound on nonce draws per sign call before giving up
pub const MAX_SIGN_ATTEMPTS: usize = 100;

/// An ECDSA signature: the scalar pair (r, s)
///
/// A valid signature has both components in [1, q-1]; out-of-range values
/// are rejected at verification time, not repaired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// First component, derived from the nonce point's x-coordinate
    pub r: BigUint,
    /// Second component, binding the digest and the private key
    pub s: BigUint,
}

/// A private scalar d with its public point Q = d·G
#[derive(Clone)]
pub struct KeyPair {
    d: BigUint,
    public: Point,
}

impl KeyPair {
    /// Rebuild a key pair from a private scalar, re-deriving the public
    /// point from the curve generator
    ///
    /// Enforces the data-model invariant 1 ≤ d ≤ q-1.
    pub fn from_private(curve: &Curve, d: BigUint) -> Result<Self> {
        if d.is_zero() || &d >= curve.order() {
            return Err(Error::InvalidParameter(
                "private scalar must lie in [1, q-1]",
            ));
        }
        let public = curve.scalar_mul(&d, curve.generator())?;
        Ok(KeyPair { d, public })
    }

    /// The private scalar d
    pub fn private_scalar(&self) -> &BigUint {
        &self.d
    }

    /// The public point Q
    pub fn public_point(&self) -> &Point {
        &self.public
    }

    /// Check that the public point lies on the given curve
    ///
    /// The check is deliberately on-demand: nothing re-derives or re-checks
    /// the point implicitly after construction.
    pub fn validate(&self, curve: &Curve) -> bool {
        curve.is_on_curve(&self.public)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("d", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

/// Why a nonce attempt was rejected; drives the retry loop and the hard
/// errors of explicit-nonce signing
enum NonceRejection {
    ZeroR,
    NonInvertibleNonce(BigUint),
    ZeroS,
    NonInvertibleS(BigUint),
}

impl NonceRejection {
    fn into_error(self, q: &BigUint) -> Error {
        match self {
            NonceRejection::ZeroR => Error::UnusableNonce { reason: "r = 0" },
            NonceRejection::ZeroS => Error::UnusableNonce { reason: "s = 0" },
            NonceRejection::NonInvertibleNonce(k) => Error::NoModularInverse {
                value: k,
                modulus: q.clone(),
            },
            NonceRejection::NonInvertibleS(s) => Error::NoModularInverse {
                value: s,
                modulus: q.clone(),
            },
        }
    }
}

/// Where the verification digest comes from: computed from the message, or
/// supplied directly (worked examples pin z without a preimage)
enum DigestSource<'a> {
    Message(&'a [u8]),
    Precomputed(&'a BigUint),
}

/// The ECDSA signature engine for one curve
pub struct Ecdsa<'a> {
    curve: &'a Curve,
}

impl<'a> Ecdsa<'a> {
    /// Create an engine over the given curve parameters
    pub fn new(curve: &'a Curve) -> Self {
        Ecdsa { curve }
    }

    /// The curve this engine operates on
    pub fn curve(&self) -> &Curve {
        self.curve
    }

    /// Generate a key pair: d uniform in [1, q-1], Q = d·G
    pub fn generate_keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<KeyPair> {
        let d = random_scalar(rng, self.curve.order());
        let public = self.curve.scalar_mul(&d, self.curve.generator())?;
        Ok(KeyPair { d, public })
    }

    /// Map a message to a scalar: the SHA-256 digest as a big-endian integer
    /// reduced mod q
    ///
    /// See the module docs for why the biased direct reduction is kept.
    pub fn hash_message(&self, message: &[u8]) -> BigUint {
        let digest = Sha256::digest(message);
        BigUint::from_bytes_be(&digest) % self.curve.order()
    }

    /// Sign a message, drawing a fresh nonce per attempt
    ///
    /// Retries on every degenerate outcome (r = 0, non-invertible nonce,
    /// s = 0, non-invertible s) up to [`MAX_SIGN_ATTEMPTS`] times, then
    /// reports [`Error::SignatureExhausted`]: persistent failure means the
    /// generator order is unsuitable, and a degenerate signature must never
    /// be returned silently.
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        message: &[u8],
        d: &BigUint,
    ) -> Result<Signature> {
        let z = self.hash_message(message);
        for _ in 0..MAX_SIGN_ATTEMPTS {
            let k = random_scalar(rng, self.curve.order());
            match self.attempt(&z, d, &k)? {
                Ok(signature) => return Ok(signature),
                Err(_) => continue,
            }
        }
        Err(Error::SignatureExhausted {
            attempts: MAX_SIGN_ATTEMPTS,
        })
    }

    /// Sign with a caller-supplied nonce
    ///
    /// Intended for deterministic demonstrations and tests. There is no
    /// retry in this mode: any rejection of the nonce is a hard error.
    /// Reusing a nonce across two signatures under the same key leaks the
    /// private key, which is precisely why [`Ecdsa::sign`] never accepts
    /// one.
    pub fn sign_with_nonce(&self, message: &[u8], d: &BigUint, k: &BigUint) -> Result<Signature> {
        let z = self.hash_message(message);
        match self.attempt(&z, d, k)? {
            Ok(signature) => Ok(signature),
            Err(rejection) => Err(rejection.into_error(self.curve.order())),
        }
    }

    /// One signing attempt with a fixed nonce
    ///
    /// The outer `Result` carries arithmetic failures that no retry can fix
    /// (degenerate modulus); the inner one distinguishes usable signatures
    /// from rejected nonces.
    fn attempt(
        &self,
        z: &BigUint,
        d: &BigUint,
        k: &BigUint,
    ) -> Result<core::result::Result<Signature, NonceRejection>> {
        let q = self.curve.order();

        // R = k·G, r = R.x mod q
        let r_point = self.curve.scalar_mul(k, self.curve.generator())?;
        let r = match r_point.x() {
            Some(x) => x % q,
            // k·G = O has no x-coordinate; treat like r = 0
            None => return Ok(Err(NonceRejection::ZeroR)),
        };
        if r.is_zero() {
            return Ok(Err(NonceRejection::ZeroR));
        }

        let k_inv = match mod_inverse(k, q) {
            Ok(inverse) => inverse,
            Err(Error::NoModularInverse { .. }) => {
                return Ok(Err(NonceRejection::NonInvertibleNonce(k.clone())))
            }
            Err(other) => return Err(other),
        };

        // s = k⁻¹(z + r·d) mod q
        let s = mod_mul(&k_inv, &mod_add(z, &mod_mul(&r, d, q), q), q);
        if s.is_zero() {
            return Ok(Err(NonceRejection::ZeroS));
        }
        // s must itself be invertible for verification to stand a chance;
        // with composite q this rejection is common
        if s.gcd(q) != BigUint::one() {
            return Ok(Err(NonceRejection::NonInvertibleS(s)));
        }

        Ok(Ok(Signature { r, s }))
    }

    /// Verify a signature; `Ok(false)` for every cryptographically invalid
    /// input
    ///
    /// Steps: range-check r and s, digest the message, w = s⁻¹ mod q,
    /// u₁ = z·w and u₂ = r·w, X = u₁·G + u₂·Q, reject the identity, accept
    /// iff X.x mod q = r. A non-invertible s simply fails verification. The
    /// error path exists only for interior arithmetic breakdown on a
    /// degenerate (non-prime p) curve.
    pub fn verify(&self, message: &[u8], signature: &Signature, public: &Point) -> Result<bool> {
        let verdict = self.verify_inner(
            DigestSource::Message(message),
            signature,
            public,
            &mut Discard,
        )?;
        Ok(verdict == Verdict::Accepted)
    }

    /// Verify a signature and record every intermediate quantity
    ///
    /// Same algorithm, same inputs, same verdict as [`Ecdsa::verify`] — the
    /// two share one stepped core, and the trace short-circuits exactly
    /// where the boolean verifier rejects.
    pub fn verify_detailed(
        &self,
        message: &[u8],
        signature: &Signature,
        public: &Point,
    ) -> Result<VerifyTrace> {
        let mut steps = Vec::new();
        let verdict = self.verify_inner(
            DigestSource::Message(message),
            signature,
            public,
            &mut steps,
        )?;
        Ok(VerifyTrace::new(steps, verdict))
    }

    /// Detailed verification with a pinned digest instead of a message
    ///
    /// Worked examples on toy curves fix z directly (no preimage is known);
    /// the digest is still reduced mod q before use.
    pub fn verify_detailed_with_digest(
        &self,
        digest: &BigUint,
        signature: &Signature,
        public: &Point,
    ) -> Result<VerifyTrace> {
        let mut steps = Vec::new();
        let verdict = self.verify_inner(
            DigestSource::Precomputed(digest),
            signature,
            public,
            &mut steps,
        )?;
        Ok(VerifyTrace::new(steps, verdict))
    }

    /// The shared verification core
    ///
    /// Both public entry points are thin recorders around this function, so
    /// they agree on every input by construction.
    fn verify_inner<S: StepSink>(
        &self,
        digest: DigestSource<'_>,
        signature: &Signature,
        public: &Point,
        sink: &mut S,
    ) -> Result<Verdict> {
        let q = self.curve.order();

        // Step 0: 1 ≤ r, s ≤ q-1
        let in_range = |v: &BigUint| !v.is_zero() && v < q;
        let range_ok = in_range(&signature.r) && in_range(&signature.s);
        sink.record(|| VerifyStep::RangeCheck {
            r: signature.r.clone(),
            s: signature.s.clone(),
            q: q.clone(),
            ok: range_ok,
        });
        if !range_ok {
            return Ok(Verdict::Rejected(RejectReason::OutOfRange));
        }

        // Digest after the range check, so a rejected signature never
        // touches the message
        let z = match digest {
            DigestSource::Message(message) => self.hash_message(message),
            DigestSource::Precomputed(value) => value % q,
        };
        sink.record(|| VerifyStep::Digest { z: z.clone() });

        // Step 1: w = s⁻¹ mod q
        let w = match mod_inverse(&signature.s, q) {
            Ok(w) => w,
            Err(Error::NoModularInverse { .. }) => {
                return Ok(Verdict::Rejected(RejectReason::NoInverse))
            }
            Err(other) => return Err(other),
        };
        sink.record(|| VerifyStep::InverseOfS {
            s: signature.s.clone(),
            w: w.clone(),
        });

        // Step 2: u₁ = z·w, u₂ = r·w
        let u1 = mod_mul(&z, &w, q);
        let u2 = mod_mul(&signature.r, &w, q);
        sink.record(|| VerifyStep::Coefficients {
            u1: u1.clone(),
            u2: u2.clone(),
        });

        // Step 3: X = u₁·G + u₂·Q
        let u1_g = self.curve.scalar_mul(&u1, self.curve.generator())?;
        let u2_q = self.curve.scalar_mul(&u2, public)?;
        let x = self.curve.add(&u1_g, &u2_q)?;
        sink.record(|| VerifyStep::Combination {
            u1_g: u1_g.clone(),
            u2_q: u2_q.clone(),
            x: x.clone(),
        });
        let x_coordinate = match x.x() {
            Some(value) => value,
            None => return Ok(Verdict::Rejected(RejectReason::IdentityResult)),
        };

        // Step 4: accept iff X.x mod q = r
        let x_mod_q = x_coordinate % q;
        let ok = x_mod_q == signature.r;
        sink.record(|| VerifyStep::Comparison {
            x_mod_q,
            r: signature.r.clone(),
            ok,
        });
        Ok(if ok {
            Verdict::Accepted
        } else {
            Verdict::Rejected(RejectReason::Mismatch)
        })
    }
}

/// Draw a scalar uniformly from [1, q-1]
fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, q: &BigUint) -> BigUint {
    let bound = q - BigUint::one();
    rng.gen_biguint_below(&bound) + BigUint::one()
}
