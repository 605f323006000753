use crate::actions::Action;
use crate::domain_models::FileInfo;
use crate::reducers::files_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    /// File attachments
    pub struct FilesState(Action) {
        files: IdMap<FileInfo> => files_reducer::files,
        /// Keyed by post id
        file_ids_by_post_id: IdMap<Vec<String>> => files_reducer::file_ids_by_post_id,
        files_from_search: IdMap<FileInfo> => files_reducer::files_from_search,
    }
}
