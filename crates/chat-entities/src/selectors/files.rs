use crate::domain_models::FileInfo;
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use crate::utils::sort::compare_locale;
use std::sync::Arc;

pub fn get_files(state: &EntitiesState) -> &Arc<IdMap<FileInfo>> {
    &state.files.files
}

pub fn get_file<'a>(state: &'a EntitiesState, id: &str) -> Option<&'a FileInfo> {
    state.files.files.get(id)
}

/// Files attached to a post, oldest first and then by name
pub fn make_get_files_for_post() -> Selector<EntitiesState, String, impl InputEq, Arc<Vec<FileInfo>>>
{
    Selector::new(
        |state: &EntitiesState, post_id: &String| {
            (
                Arc::clone(&state.files.files),
                Arc::clone(&state.files.file_ids_by_post_id),
                post_id.clone(),
            )
        },
        |(files, ids_by_post, post_id)| {
            let mut attached: Vec<FileInfo> = ids_by_post
                .get(post_id)
                .into_iter()
                .flatten()
                .filter_map(|id| files.get(id))
                .cloned()
                .collect();
            attached.sort_by(|a, b| {
                a.create_at
                    .cmp(&b.create_at)
                    .then_with(|| compare_locale(&a.name, &b.name))
            });
            Arc::new(attached)
        },
    )
}

/// Files of the current file search, in result order
pub fn make_get_file_search_results(
) -> Selector<EntitiesState, (), impl InputEq, Arc<Vec<FileInfo>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| {
            (
                Arc::clone(&state.files.files_from_search),
                Arc::clone(&state.search.file_results),
            )
        },
        |(found, order)| {
            Arc::new(
                order
                    .iter()
                    .filter_map(|id| found.get(id))
                    .cloned()
                    .collect(),
            )
        },
    )
}
