//! Option exercise style definitions.

use std::fmt;

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// assert_eq!(ExerciseStyle::American.to_string(), "American");
/// assert_ne!(ExerciseStyle::European, ExerciseStyle::American);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ExerciseStyle::European.to_string(), "European");
        assert_eq!(ExerciseStyle::American.to_string(), "American");
    }
}
