//! Invariant test suite for the Neumark issuance curve.
//!
//! This crate contains integration tests that pin the curve's normative
//! values and attempt to break its invariants under randomized inputs.

pub mod helpers;
