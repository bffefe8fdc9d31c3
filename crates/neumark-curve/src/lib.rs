//! # neumark-curve — Integer-only issuance curve.
//!
//! All calculations use fixed-width integer arithmetic only for determinism.
//!
//! The curve approximates `CAP * (1 - e^(-x / D))` in three layers:
//! - **Series evaluator**: cumulative issuance for a total contribution via a
//!   truncated alternating series, saturating at the cap past a threshold.
//! - **Inverse solver**: upper-biased bisection over the evaluator, rounding
//!   up when no contribution maps exactly to the target.
//! - **Delta operations**: issuance for an additional contribution, and the
//!   contribution equivalent of retiring issuance.

pub mod delta;
pub mod engine;
pub mod series;
pub mod solver;

pub use delta::{incremental, incremental_inverse, incremental_inverse_in};
pub use engine::CurveEngine;
pub use series::{cumulative, evaluate, SeriesEvaluation, MAX_SERIES_PAIRS};
pub use solver::{bisect, cumulative_inverse};
