mod arena;
mod handle;
mod node;
mod raw_rank_set;

pub(crate) use raw_rank_set::RawRankSet;
