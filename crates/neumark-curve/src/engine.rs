//! Curve engine implementing the [`IssuanceCurve`] trait.
//!
//! A zero-sized handle over the free functions of this crate, for callers
//! that hold the curve behind `&dyn IssuanceCurve`.

use neumark_core::error::CurveError;
use neumark_core::traits::IssuanceCurve;
use neumark_core::U256;

use crate::{delta, series, solver};

/// The production issuance curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveEngine;

impl CurveEngine {
    /// Create a new CurveEngine.
    pub fn new() -> Self {
        Self
    }
}

impl IssuanceCurve for CurveEngine {
    fn cumulative(&self, contributed: U256) -> Result<U256, CurveError> {
        series::cumulative(contributed)
    }

    fn cumulative_inverse(
        &self,
        issued: U256,
        min: U256,
        max: U256,
    ) -> Result<U256, CurveError> {
        solver::cumulative_inverse(issued, min, max)
    }

    fn incremental(&self, total: U256, delta: U256) -> Result<U256, CurveError> {
        delta::incremental(total, delta)
    }

    fn incremental_inverse_in(
        &self,
        total: U256,
        issued_delta: U256,
        min: U256,
        max: U256,
    ) -> Result<U256, CurveError> {
        delta::incremental_inverse_in(total, issued_delta, min, max)
    }
}
