// File store boundary consumed by the shell (explorer, notepad, recycle bin)

mod memory;

pub use memory::MemoryFileStore;

use crate::session::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Longest accepted file name, in characters
pub const MAX_NAME_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(Uuid);

impl FileId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for FileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub owner: UserId,
    pub is_public: bool,
    pub is_trashed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFile {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_public: bool,
}

fn default_kind() -> String {
    "text".to_string()
}

impl NewFile {
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            kind: default_kind(),
            is_public: false,
        }
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

/// Which side of the trash to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    /// Live files the viewer may see: their own plus public ones
    Active,
    /// The viewer's own trashed files
    Trash,
}

#[derive(Debug, Error, PartialEq)]
pub enum FileStoreError {
    #[error("file {0} not found")]
    NotFound(FileId),
    #[error("please provide a file name")]
    NameRequired,
    #[error("name cannot be more than {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },
    #[error("file {0} must be in the recycle bin before it can be deleted permanently")]
    NotTrashed(FileId),
}

pub type Result<T> = std::result::Result<T, FileStoreError>;

/// Persistence collaborator for user files.
///
/// Files are moved to the trash first; only trashed files can be removed
/// for good.
pub trait FileStore {
    /// Files visible to `viewer` (None = guest), newest update first
    fn list(&self, viewer: Option<&UserId>, filter: ListFilter) -> Vec<FileRecord>;

    fn get(&self, id: FileId) -> Result<FileRecord>;

    fn create(&mut self, owner: &UserId, file: NewFile) -> Result<FileRecord>;

    /// Replace the content, optionally changing visibility
    fn update(&mut self, id: FileId, content: String, is_public: Option<bool>)
        -> Result<FileRecord>;

    /// Move a file to the trash
    fn soft_delete(&mut self, id: FileId) -> Result<FileRecord>;

    /// Remove a trashed file permanently
    fn hard_delete(&mut self, id: FileId) -> Result<()>;

    /// Take a file back out of the trash
    fn restore(&mut self, id: FileId) -> Result<FileRecord>;

    /// Trash a live file, or permanently remove one already in the trash
    fn delete(&mut self, id: FileId) -> Result<()> {
        if self.get(id)?.is_trashed {
            self.hard_delete(id)
        } else {
            self.soft_delete(id).map(|_| ())
        }
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if name.trim().is_empty() {
        return Err(FileStoreError::NameRequired);
    }
    if len > MAX_NAME_LEN {
        return Err(FileStoreError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}
