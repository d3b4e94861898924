//! CCTP v2 finality threshold types
//!
//! CCTP v2 messages carry a minimum finality threshold that determines how
//! much source-chain confirmation depth Circle requires before attesting.
//! Lower thresholds enable Fast Transfer at a small fee cost.
//!
//! Reference: <https://developers.circle.com/cctp/technical-guide>

use std::fmt;

/// Finality threshold for CCTP v2 messages
///
/// # Examples
///
/// ```rust
/// use cctp_solver::FinalityThreshold;
///
/// assert_eq!(FinalityThreshold::Fast.as_u32(), 1000);
/// assert_eq!(FinalityThreshold::Standard.as_u32(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FinalityThreshold {
    /// Fast Transfer - attestation at confirmed block level (threshold: 1000)
    Fast = 1000,

    /// Standard Transfer - attestation at finalized block level (threshold: 2000)
    Standard = 2000,
}

impl FinalityThreshold {
    /// Returns the numeric threshold value
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Returns true if this is a Fast Transfer threshold
    #[inline]
    pub const fn is_fast(self) -> bool {
        matches!(self, Self::Fast)
    }

    /// Returns a descriptive name for this threshold
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fast => "Fast Transfer",
            Self::Standard => "Standard Transfer",
        }
    }
}

impl Default for FinalityThreshold {
    /// Standard is the safe default; the burn builder opts into Fast.
    fn default() -> Self {
        Self::Standard
    }
}

impl From<FinalityThreshold> for u32 {
    #[inline]
    fn from(threshold: FinalityThreshold) -> Self {
        threshold.as_u32()
    }
}

impl fmt::Display for FinalityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_values() {
        assert_eq!(FinalityThreshold::Fast.as_u32(), 1000);
        assert_eq!(FinalityThreshold::Standard.as_u32(), 2000);
    }

    #[test]
    fn test_is_fast() {
        assert!(FinalityThreshold::Fast.is_fast());
        assert!(!FinalityThreshold::Standard.is_fast());
    }

    #[test]
    fn test_default() {
        assert_eq!(FinalityThreshold::default(), FinalityThreshold::Standard);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", FinalityThreshold::Fast),
            "Fast Transfer (1000)"
        );
    }
}
