//! Tax calculation modules.
//!
//! [`TaxEngine`] turns a [`TaxInput`](crate::TaxInput) into a
//! [`TaxResult`](crate::TaxResult); the comparison and breakdown modules
//! derive views from those results.

pub mod breakdown;
pub mod common;
pub mod comparison;
pub mod tax_engine;

pub use breakdown::{BreakdownBar, BreakdownKind, TaxBreakdown};
pub use comparison::RegimeComparison;
pub use tax_engine::{TaxEngine, compute};
