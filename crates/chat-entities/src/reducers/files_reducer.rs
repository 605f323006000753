use crate::actions::{Action, FileAction, PostAction, UserAction};
use crate::domain_models::{FileInfo, Post};
use crate::toolkit::keyed::{deleted, deleted_many, received_entities, received_if_changed, received_many, reset};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// File metadata keyed by file id
pub fn files(prior: &Arc<IdMap<FileInfo>>, action: &Action) -> Arc<IdMap<FileInfo>> {
    match action {
        Action::File(FileAction::ReceivedFilesForPost { files, .. }) => {
            received_entities(prior, files)
        }
        Action::File(FileAction::ReceivedUploadFiles(files)) => received_entities(prior, files),
        Action::Post(PostAction::PostDeleted(post) | PostAction::PostRemoved(post)) => {
            let ids = file_ids_of(prior, post);
            deleted_many(prior, ids.iter().map(String::as_str))
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// File ids attached to each post
pub fn file_ids_by_post_id(
    prior: &Arc<IdMap<Vec<String>>>,
    action: &Action,
) -> Arc<IdMap<Vec<String>>> {
    match action {
        Action::File(FileAction::ReceivedFilesForPost { post_id, files }) => {
            let ids = files.iter().map(|file| file.id.clone()).collect();
            received_if_changed(prior, post_id, ids)
        }
        Action::Post(PostAction::PostDeleted(post) | PostAction::PostRemoved(post)) => {
            deleted(prior, &post.id)
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Files matched by the last file search, keyed by file id
pub fn files_from_search(prior: &Arc<IdMap<FileInfo>>, action: &Action) -> Arc<IdMap<FileInfo>> {
    match action {
        Action::File(FileAction::ReceivedFilesForSearch(files)) => received_many(
            prior,
            files
                .iter()
                .filter(|(id, _)| !id.is_empty())
                .map(|(id, file)| (id.clone(), file.clone())),
        ),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Ids of every stored file that belongs to `post`
fn file_ids_of(stored: &IdMap<FileInfo>, post: &Post) -> Vec<String> {
    let mut ids = post.file_ids.clone();
    ids.extend(
        stored
            .values()
            .filter(|file| !post.id.is_empty() && file.post_id == post.id)
            .map(|file| file.id.clone()),
    );
    ids
}
