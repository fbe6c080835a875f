//! Educational ECDSA over caller-supplied short-Weierstrass curves
//!
//! This crate teaches the Elliptic Curve Digital Signature Algorithm by
//! implementing it end to end on curves small enough to follow by hand:
//! the group law on y² = x³ + ax + b (mod p), key generation, signing with
//! its retry-on-degenerate-nonce loop, plain and step-traced verification,
//! and a dual-format text codec so keys and signatures can be exchanged
//! between processes.
//!
//! **This is a teaching library, not a cryptographic one.** Arithmetic is
//! variable time, nothing defends against side channels, and the bundled
//! curves are breakable on paper. Use a vetted ECDSA implementation for
//! anything that matters.
//!
//! # Example
//!
//! ```
//! use ecdsa_lab::{params, Ecdsa};
//!
//! let curve = params::demo_p97();
//! let engine = Ecdsa::new(&curve);
//! let mut rng = rand::thread_rng();
//!
//! let keys = engine.generate_keypair(&mut rng)?;
//! let signature = engine.sign(&mut rng, b"adios mundo", keys.private_scalar())?;
//! assert!(engine.verify(b"adios mundo", &signature, keys.public_point())?);
//! # Ok::<(), ecdsa_lab::Error>(())
//! ```

pub mod curve;
pub mod ecdsa;
pub mod encoding;
pub mod error;
pub mod keystore;
pub mod params;

pub use curve::{Curve, Point};
pub use ecdsa::trace::{RejectReason, Verdict, VerifyStep, VerifyTrace};
pub use ecdsa::{Ecdsa, KeyPair, Signature, MAX_SIGN_ATTEMPTS};
pub use error::{Error, Result};
pub use keystore::{KeyStore, UserKeys};
