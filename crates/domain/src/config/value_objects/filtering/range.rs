// crates/domain/src/config/value_objects/filtering/range.rs
use word_cloud_shared_kernel::{DomainError, DomainResult};

/// Inclusive range helper used for count-based filtering of the report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl CountRange {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Build from CLI thresholds where `0` means "no bound".
    pub fn from_thresholds(min: usize, max: usize) -> Self {
        let bound = |n: usize| (n > 0).then_some(n);
        Self::new(bound(min), bound(max))
    }

    /// An upper bound below the lower bound can never match anything.
    pub fn validate(self) -> DomainResult<Self> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if max < min => Err(DomainError::InvalidCountRange { min, max }),
            _ => Ok(self),
        }
    }

    #[inline]
    pub fn contains(&self, value: usize) -> bool {
        self.min.is_none_or(|m| value >= m) && self.max.is_none_or(|m| value <= m)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}
