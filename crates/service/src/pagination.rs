//! Offset/limit pagination for listing contacts.

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 10;

/// SQL drivers bind OFFSET/LIMIT as signed 64-bit integers.
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip from the start of the ordered set
    pub skip: u64,
    /// maximum rows to return; must be positive
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    /// Rejects a zero limit and clamps both bounds to [`MAX_BOUND`].
    pub fn validate(self) -> Result<Self, ServiceError> {
        if self.limit == 0 {
            return Err(ServiceError::Validation("limit must be greater than 0".into()));
        }
        Ok(self.clamped())
    }

    pub fn clamped(self) -> Self {
        Self { skip: self.skip.min(MAX_BOUND), limit: self.limit.min(MAX_BOUND) }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::{Pagination, MAX_BOUND};

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 10);
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(Pagination::new(0, 0).validate().is_err());
        assert_eq!(Pagination::new(3, 1).validate().unwrap(), Pagination::new(3, 1));
    }

    #[test]
    fn bounds_beyond_i64_are_clamped() {
        let p = Pagination::new(u64::MAX, u64::MAX).validate().unwrap();
        assert_eq!(p, Pagination::new(MAX_BOUND, MAX_BOUND));
        assert_eq!(MAX_BOUND, i64::MAX as u64);
    }
}
