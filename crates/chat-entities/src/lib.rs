//! Normalized client-side entity store for a chat application
//!
//! Server entities (themes, plugins, threads, files, preferences, jobs,
//! search results, timezones, channels and custom emoji) are mirrored into an
//! immutable [`EntitiesState`] by pure reducers and read back through
//! selectors.
//!
//! - [`actions`]: the actions the store understands and their wire decoding
//! - [`reducers`]: one pure reducer per slice, composed with [`combine_reducers!`]
//! - [`selectors`]: plain getters and memoized `make_*` selector factories
//! - [`store`]: a Redux-style store with a middleware chain
//! - [`utils`]: preference keys, timezones, localization and delayed actions
//!
//! Every mutating action yields a new `Arc` for the slices it touches and
//! leaves all other slices (and the state itself, if nothing changed) at their
//! prior reference, which is what memoized selectors key their caches on.

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod persist;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;
pub mod toolkit;
pub mod utils;

pub use actions::{Action, RawAction};
pub use dispatcher::Dispatcher;
pub use state::EntitiesState;
pub use store::Store;
