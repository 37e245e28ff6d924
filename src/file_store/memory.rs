use super::{validate_name, FileId, FileRecord, FileStore, FileStoreError, ListFilter, NewFile, Result};
use crate::session::UserId;
use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;

/// In-process file store used by the desktop and its tests
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: HashMap<FileId, FileRecord>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn get_mut(&mut self, id: FileId) -> Result<&mut FileRecord> {
        self.files.get_mut(&id).ok_or(FileStoreError::NotFound(id))
    }
}

impl FileStore for MemoryFileStore {
    fn list(&self, viewer: Option<&UserId>, filter: ListFilter) -> Vec<FileRecord> {
        let mut files: Vec<FileRecord> = self
            .files
            .values()
            .filter(|f| match filter {
                ListFilter::Active => {
                    !f.is_trashed && (f.is_public || viewer == Some(&f.owner))
                }
                // Guests have no trash
                ListFilter::Trash => f.is_trashed && viewer == Some(&f.owner),
            })
            .cloned()
            .collect();

        files.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        files
    }

    fn get(&self, id: FileId) -> Result<FileRecord> {
        self.files
            .get(&id)
            .cloned()
            .ok_or(FileStoreError::NotFound(id))
    }

    fn create(&mut self, owner: &UserId, file: NewFile) -> Result<FileRecord> {
        validate_name(&file.name)?;

        let now = Utc::now();
        let record = FileRecord {
            id: FileId::new_v4(),
            name: file.name,
            content: file.content,
            kind: file.kind,
            owner: owner.clone(),
            is_public: file.is_public,
            is_trashed: false,
            created_at: now,
            updated_at: now,
        };
        debug!(file = %record.id, name = %record.name, "created file");
        self.files.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(
        &mut self,
        id: FileId,
        content: String,
        is_public: Option<bool>,
    ) -> Result<FileRecord> {
        let file = self.get_mut(id)?;
        file.content = content;
        if let Some(is_public) = is_public {
            file.is_public = is_public;
        }
        file.updated_at = Utc::now();
        Ok(file.clone())
    }

    fn soft_delete(&mut self, id: FileId) -> Result<FileRecord> {
        let file = self.get_mut(id)?;
        file.is_trashed = true;
        file.updated_at = Utc::now();
        debug!(file = %id, "moved file to trash");
        Ok(file.clone())
    }

    fn hard_delete(&mut self, id: FileId) -> Result<()> {
        if !self.get_mut(id)?.is_trashed {
            return Err(FileStoreError::NotTrashed(id));
        }
        self.files.remove(&id);
        debug!(file = %id, "deleted file permanently");
        Ok(())
    }

    fn restore(&mut self, id: FileId) -> Result<FileRecord> {
        let file = self.get_mut(id)?;
        file.is_trashed = false;
        file.updated_at = Utc::now();
        Ok(file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserId {
        UserId::new("alice")
    }

    fn bob() -> UserId {
        UserId::new("bob")
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut store = MemoryFileStore::new();
        let file = store.create(&alice(), NewFile::text("a.txt", "")).unwrap();
        assert_eq!(file.kind, "text");
        assert!(!file.is_public);
        assert!(!file.is_trashed);
        assert_eq!(file.owner, alice());
    }

    #[test]
    fn test_create_validates_name() {
        let mut store = MemoryFileStore::new();
        assert_eq!(
            store.create(&alice(), NewFile::text("  ", "")),
            Err(FileStoreError::NameRequired)
        );
        let long = "x".repeat(61);
        assert_eq!(
            store.create(&alice(), NewFile::text(long, "")),
            Err(FileStoreError::NameTooLong { len: 61, max: 60 })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_active_listing_respects_owner_and_public() {
        let mut store = MemoryFileStore::new();
        store.create(&alice(), NewFile::text("private.txt", "")).unwrap();
        store.create(&alice(), NewFile::text("shared.txt", "").public()).unwrap();
        store.create(&bob(), NewFile::text("bob.txt", "")).unwrap();

        let names = |files: Vec<FileRecord>| {
            let mut names: Vec<String> = files.into_iter().map(|f| f.name).collect();
            names.sort();
            names
        };

        assert_eq!(
            names(store.list(Some(&alice()), ListFilter::Active)),
            vec!["private.txt", "shared.txt"]
        );
        assert_eq!(
            names(store.list(Some(&bob()), ListFilter::Active)),
            vec!["bob.txt", "shared.txt"]
        );
        assert_eq!(names(store.list(None, ListFilter::Active)), vec!["shared.txt"]);
    }

    #[test]
    fn test_trash_lifecycle() {
        let mut store = MemoryFileStore::new();
        let file = store.create(&alice(), NewFile::text("a.txt", "")).unwrap();

        assert_eq!(store.hard_delete(file.id), Err(FileStoreError::NotTrashed(file.id)));

        store.soft_delete(file.id).unwrap();
        assert!(store.list(Some(&alice()), ListFilter::Active).is_empty());
        assert_eq!(store.list(Some(&alice()), ListFilter::Trash).len(), 1);
        assert!(store.list(Some(&bob()), ListFilter::Trash).is_empty());
        assert!(store.list(None, ListFilter::Trash).is_empty());

        store.restore(file.id).unwrap();
        assert_eq!(store.list(Some(&alice()), ListFilter::Active).len(), 1);

        // delete() trashes first, then removes for good
        store.delete(file.id).unwrap();
        assert!(store.get(file.id).unwrap().is_trashed);
        store.delete(file.id).unwrap();
        assert_eq!(store.get(file.id), Err(FileStoreError::NotFound(file.id)));
    }

    #[test]
    fn test_update_content_and_visibility() {
        let mut store = MemoryFileStore::new();
        let file = store.create(&alice(), NewFile::text("a.txt", "v1")).unwrap();

        let updated = store.update(file.id, "v2".to_string(), None).unwrap();
        assert_eq!(updated.content, "v2");
        assert!(!updated.is_public);
        assert!(updated.updated_at >= file.updated_at);

        let updated = store.update(file.id, "v3".to_string(), Some(true)).unwrap();
        assert!(updated.is_public);
        assert!(store.list(Some(&bob()), ListFilter::Active).len() == 1);
    }

    #[test]
    fn test_missing_file_errors() {
        let mut store = MemoryFileStore::new();
        let ghost = FileId::new_v4();
        assert_eq!(store.get(ghost), Err(FileStoreError::NotFound(ghost)));
        assert_eq!(store.restore(ghost), Err(FileStoreError::NotFound(ghost)));
        assert_eq!(
            store.update(ghost, String::new(), None),
            Err(FileStoreError::NotFound(ghost))
        );
    }
}
