//! Slice reducers, one module per domain.
//!
//! Every function here is a pure `(&Arc<Slice>, &Action) -> Arc<Slice>` and
//! hands back the prior `Arc` for actions it does not handle.

pub mod channels_reducer;
pub mod emojis_reducer;
pub mod entities_reducer;
pub mod files_reducer;
pub mod general_reducer;
pub mod jobs_reducer;
pub mod plugins_reducer;
pub mod preferences_reducer;
pub mod search_reducer;
pub mod themes_reducer;
pub mod threads_reducer;

pub use entities_reducer::reduce;
