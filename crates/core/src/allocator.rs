//! Sequential identity allocation.
//!
//! Each entity type gets its own [`IdAllocator`], owned by the service that owns the entity
//! collection. Identifiers start at 1 and only move forward: [`IdAllocator::resync`] exists so a
//! bulk loader can skip past identifiers that already exist, and it refuses to move the counter
//! backwards.

use crate::{ClinicError, ClinicResult};

/// The first identifier issued by a fresh allocator.
pub const FIRST_ID: u32 = 1;

/// Produces a strictly increasing sequence of identifiers for one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator whose first identifier is [`FIRST_ID`].
    pub fn new() -> Self {
        Self { next: FIRST_ID }
    }

    /// Creates an allocator whose first identifier is `next`.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidInput` if `next` is zero, which is reserved for records that
    /// have not been assigned an identifier.
    pub fn starting_at(next: u32) -> ClinicResult<Self> {
        if next == 0 {
            return Err(ClinicError::InvalidInput(
                "identifier counter cannot start at 0".into(),
            ));
        }
        Ok(Self { next })
    }

    /// Returns the identifier the next call to [`next`](Self::next) will issue.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Issues the current identifier and advances the counter.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Unexpected` once the identifier space is exhausted. The counter is
    /// left unchanged, so no identifier is ever issued twice.
    pub fn next(&mut self) -> ClinicResult<u32> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or_else(|| ClinicError::Unexpected("identifier space exhausted".into()))?;
        Ok(id)
    }

    /// Moves the counter so that the next identifier issued is `next`.
    ///
    /// # Arguments
    ///
    /// * `next` - Usually `max existing id + 1`, after loading records that already carry
    ///   identifiers
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidInput` if `next` is zero or lower than the current counter.
    /// Moving backwards could hand out an identifier that is already in use.
    pub fn resync(&mut self, next: u32) -> ClinicResult<()> {
        if next == 0 || next < self.next {
            return Err(ClinicError::InvalidInput(format!(
                "cannot resync identifier counter from {} back to {}",
                self.next, next
            )));
        }
        tracing::debug!("resync identifier counter {} -> {}", self.next, next);
        self.next = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_allocator_issues_strictly_increasing_ids() {
        let mut ids = IdAllocator::new();
        let issued: Vec<u32> = (0..5).map(|_| ids.next().unwrap()).collect();
        assert_eq!(issued, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_resync_next_issues_exactly_n() {
        let mut ids = IdAllocator::new();
        ids.next().unwrap();
        ids.resync(42).unwrap();
        assert_eq!(ids.next().unwrap(), 42);
        assert_eq!(ids.next().unwrap(), 43);
    }

    #[test]
    fn test_resync_to_current_value_is_allowed() {
        let mut ids = IdAllocator::new();
        ids.next().unwrap();
        ids.resync(2).unwrap();
        assert_eq!(ids.peek(), 2);
    }

    #[test]
    fn test_resync_rejects_regression() {
        let mut ids = IdAllocator::starting_at(10).unwrap();
        let err = ids.resync(3).unwrap_err();
        assert!(matches!(err, ClinicError::InvalidInput(_)));
        assert_eq!(ids.peek(), 10);
    }

    #[test]
    fn test_resync_rejects_zero() {
        let mut ids = IdAllocator::new();
        assert!(ids.resync(0).is_err());
    }

    #[test]
    fn test_starting_at_zero_is_rejected() {
        assert!(IdAllocator::starting_at(0).is_err());
    }

    #[test]
    fn test_exhausted_allocator_does_not_wrap() {
        let mut ids = IdAllocator::starting_at(u32::MAX).unwrap();
        assert!(matches!(ids.next(), Err(ClinicError::Unexpected(_))));
        assert_eq!(ids.peek(), u32::MAX);
    }
}
