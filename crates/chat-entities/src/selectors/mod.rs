//! Selectors
//!
//! Plain functions read a slice directly. `make_*` factories return a fresh
//! memoized [`Selector`](crate::toolkit::Selector) with its own cache; create
//! one per call site (or per parameter value) and keep it around.

pub mod channels;
pub mod emojis;
pub mod files;
pub mod general;
pub mod jobs;
pub mod plugins;
pub mod preferences;
pub mod search;
pub mod themes;
pub mod threads;

pub use channels::*;
pub use emojis::*;
pub use files::*;
pub use general::*;
pub use jobs::*;
pub use plugins::*;
pub use preferences::*;
pub use search::*;
pub use themes::*;
pub use threads::*;
