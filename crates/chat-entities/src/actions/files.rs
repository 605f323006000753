//! File attachment actions

use super::RawAction;
use crate::domain_models::FileInfo;
use crate::toolkit::IdMap;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FileActionType {
    ReceivedFilesForPost,
    ReceivedUploadFiles,
    ReceivedFilesForSearch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileAction {
    ReceivedFilesForPost { post_id: String, files: Vec<FileInfo> },
    ReceivedUploadFiles(Vec<FileInfo>),
    /// Search hits keyed by file id
    ReceivedFilesForSearch(IdMap<FileInfo>),
}

impl FileAction {
    pub fn action_type(&self) -> FileActionType {
        match self {
            Self::ReceivedFilesForPost { .. } => FileActionType::ReceivedFilesForPost,
            Self::ReceivedUploadFiles(_) => FileActionType::ReceivedUploadFiles,
            Self::ReceivedFilesForSearch(_) => FileActionType::ReceivedFilesForSearch,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = FileActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            FileActionType::ReceivedFilesForPost => Self::ReceivedFilesForPost {
                post_id: raw.field("postId"),
                files: raw.data(),
            },
            FileActionType::ReceivedUploadFiles => Self::ReceivedUploadFiles(raw.data()),
            FileActionType::ReceivedFilesForSearch => Self::ReceivedFilesForSearch(raw.data()),
        })
    }
}
