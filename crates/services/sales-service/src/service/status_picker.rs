//! Initial status selection for new sales.

use rand::seq::SliceRandom;

use domain::{DomainError, DomainResult, SaleStatus};

/// Picks the status a new sale starts in.
pub trait StatusPicker: Send + Sync {
    fn pick(&self, candidates: &[SaleStatus]) -> DomainResult<SaleStatus>;
}

/// Uniform choice over the candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStatusPicker;

impl StatusPicker for RandomStatusPicker {
    fn pick(&self, candidates: &[SaleStatus]) -> DomainResult<SaleStatus> {
        candidates
            .choose(&mut rand::thread_rng())
            .copied()
            .ok_or_else(|| DomainError::invalid_input("initial status set must not be empty"))
    }
}

/// Always the same status. Used to make flows deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedStatusPicker(pub SaleStatus);

impl StatusPicker for FixedStatusPicker {
    fn pick(&self, _candidates: &[SaleStatus]) -> DomainResult<SaleStatus> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_pick_stays_within_candidates() {
        let candidates = [SaleStatus::Pending, SaleStatus::Rejected];
        let picked: HashSet<SaleStatus> = (0..200)
            .map(|_| RandomStatusPicker.pick(&candidates).unwrap())
            .collect();

        assert!(picked.iter().all(|s| candidates.contains(s)));
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_random_pick_from_empty_set() {
        assert!(RandomStatusPicker.pick(&[]).is_err());
    }
}
