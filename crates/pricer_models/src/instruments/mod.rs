//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`VanillaOption`]: European/American call or put
//! - [`OptionType`]: Call/Put payoff direction
//! - [`ExerciseStyle`]: European/American exercise
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
//!
//! let call = VanillaOption::new(100.0, 1.0, OptionType::Call, ExerciseStyle::European);
//! assert_eq!(call.payoff(110.0), 10.0);
//! ```

mod exercise;
mod payoff;
mod vanilla;

pub use exercise::ExerciseStyle;
pub use payoff::OptionType;
pub use vanilla::VanillaOption;
