//! Mathematical primitives shared by every pricing engine.
//!
//! - [`distributions`]: Standard normal PDF/CDF and `clamp`
//! - [`solvers`]: Bracketing root-finders

pub mod distributions;
pub mod solvers;
