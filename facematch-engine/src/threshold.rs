use crate::error::MatchError;

pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Maximum accepted distance, exclusive.
///
/// A threshold of zero is degenerate: only a candidate at exactly zero
/// distance is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Builds a threshold, degrading zero, negative and non-finite values to
    /// the exact-match-only threshold.
    pub fn new(value: f64) -> Self {
        if is_usable(value) {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    /// Like [`Threshold::new`] but reports a degenerate value instead of
    /// silently accepting it.
    pub fn checked(value: f64) -> Result<Self, MatchError> {
        if is_usable(value) {
            Ok(Self(value))
        } else {
            Err(MatchError::DegenerateThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.0 == 0.0
    }

    /// Whether `distance` may be accepted at all.
    pub fn admits(&self, distance: f64) -> bool {
        if self.is_degenerate() {
            distance == 0.0
        } else {
            distance < self.0
        }
    }

    /// Display confidence for an accepted distance: 100 at zero, 0 at the
    /// threshold, linear in between.
    pub fn confidence(&self, distance: f64) -> u8 {
        if self.is_degenerate() {
            return if distance == 0.0 { 100 } else { 0 };
        }
        let scaled = ((1.0 - distance / self.0) * 100.0).round();
        scaled.clamp(0.0, 100.0) as u8
    }
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}
