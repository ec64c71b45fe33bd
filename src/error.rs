use thiserror::Error;

/// Error returned by [`RankSet::insert`](crate::RankSet::insert) when the
/// key is already present.
///
/// The set is left exactly as it was; the caller decides whether to skip
/// the key or abort the batch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("key is already present in the set")]
pub struct DuplicateKey;

/// Error returned by [`RankSet::select`](crate::RankSet::select) when the
/// requested rank is outside `1..=len`.
///
/// Carries the rank that was asked for. Ranks are 1-indexed, so rank 0 is
/// always out of range, as is any rank on an empty set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("rank {0} is out of range")]
pub struct OutOfRange(pub usize);
