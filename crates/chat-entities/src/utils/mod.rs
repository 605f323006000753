//! Utility helpers shared by reducers, selectors and the host application.

pub mod delayed;
pub mod i18n;
pub mod preference_key;
pub mod sort;
pub mod timezone;

pub use delayed::DelayedAction;
pub use i18n::Localizer;
pub use preference_key::{get_preference_key, strip_category};
pub use timezone::{get_user_current_timezone, UserTimezone};
