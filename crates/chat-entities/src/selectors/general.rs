use crate::state::EntitiesState;
use crate::toolkit::{InputEq, Selector};
use crate::utils::sort::compare_locale;
use crate::utils::timezone::timezone_label;
use std::sync::Arc;

pub fn get_supported_timezones(state: &EntitiesState) -> &Arc<Vec<String>> {
    &state.general.supported_timezones
}

/// A timezone option for pickers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneOption {
    pub value: String,
    pub label: String,
}

/// Supported timezones with display labels, ordered by label
pub fn make_get_timezone_options(
) -> Selector<EntitiesState, (), impl InputEq, Arc<Vec<TimezoneOption>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| Arc::clone(&state.general.supported_timezones),
        |timezones| {
            let mut options: Vec<TimezoneOption> = timezones
                .iter()
                .map(|timezone| TimezoneOption {
                    value: timezone.clone(),
                    label: timezone_label(timezone),
                })
                .collect();
            options.sort_by(|a, b| compare_locale(&a.label, &b.label));
            Arc::new(options)
        },
    )
}
