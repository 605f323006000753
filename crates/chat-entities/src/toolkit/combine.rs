//! Combined reducers
//!
//! `combine_reducers!` turns a list of named slice reducers into one record
//! type plus a reducer over that record. Each slice reducer has the shape
//! `fn(&Arc<Slice>, &Action) -> Arc<Slice>`; the generated record reducer has
//! the same shape, so records nest.

/// Declare a state record whose fields are independently reduced slices.
///
/// ```rust
/// use std::sync::Arc;
/// use chat_entities::combine_reducers;
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
/// }
///
/// fn reduce_count(prior: &Arc<u32>, action: &CounterAction) -> Arc<u32> {
///     match action {
///         CounterAction::Increment => Arc::new(**prior + 1),
///     }
/// }
///
/// fn reduce_label(prior: &Arc<String>, _action: &CounterAction) -> Arc<String> {
///     Arc::clone(prior)
/// }
///
/// combine_reducers! {
///     pub struct CounterState(CounterAction) {
///         count: u32 => reduce_count,
///         label: String => reduce_label,
///     }
/// }
///
/// let state = Arc::new(CounterState::default());
/// let next = CounterState::reduce(&state, &CounterAction::Increment);
/// assert_eq!(*next.count, 1);
/// assert!(Arc::ptr_eq(&state.label, &next.label));
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($action:ty) {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $slice:ty => $reducer:path
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::std::sync::Arc<$slice>,
            )+
        }

        impl $name {
            /// Slice names in the order they are reduced
            pub const SLICES: &'static [&'static str] = &[$(stringify!($field)),+];

            /// Apply `action` to every slice in declaration order.
            ///
            /// Returns `prior` itself when no slice produced a new value.
            pub fn reduce(
                prior: &::std::sync::Arc<Self>,
                action: &$action,
            ) -> ::std::sync::Arc<Self> {
                $(
                    let $field = $reducer(&prior.$field, action);
                )+

                let changed = false $(|| !::std::sync::Arc::ptr_eq(&$field, &prior.$field))+;
                if changed {
                    ::std::sync::Arc::new(Self { $($field,)+ })
                } else {
                    ::std::sync::Arc::clone(prior)
                }
            }
        }
    };
}
