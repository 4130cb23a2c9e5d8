//! Search over the catalog and the cache of named orderings built from it.

pub mod permutations;
pub mod search;

pub use permutations::{Permutation, PermutationCache, PermutationKey, shuffle};
pub use search::search;
