//! Normalized store toolkit: keyed slice operations, combined reducers and
//! memoized selectors. Every entity module is built from these pieces.

pub mod combine;
pub mod keyed;
pub mod memo;

pub use keyed::{Entity, IdMap};
pub use memo::{InputEq, Selector};
