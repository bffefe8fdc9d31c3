//! # neumark-core
//! Foundation constants, amount handling and traits for the Neumark
//! issuance curve. All quantities are 256-bit unsigned integers scaled by
//! 10^18 ("Ulps").

pub mod amount;
pub mod constants;
pub mod error;
pub mod traits;

pub use amount::{format_units, parse_units, Ulps};
pub use ruint::aliases::{U256, U512};
