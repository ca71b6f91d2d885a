//! File-backed storage: one framed document file per key.

use super::{KeyValueStorage, StorageKey};
use crate::error::{Result, StoreError};
use fs2::FileExt;
use lru::LruCache;
use parking_lot::Mutex;
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Magic bytes for document files.
const DOC_MAGIC: &[u8; 4] = b"GRV\0";

/// Current document format version.
const DOC_VERSION: u8 = 1;

/// Extension for document files.
const DOC_EXTENSION: &str = "doc";

/// Directory-backed storage.
///
/// Layout per document: magic, version, payload length (u64 LE), payload,
/// CRC32 of the payload (u32 LE). The directory is held under an exclusive
/// lock for the lifetime of the value.
pub struct FileStorage {
    /// Base directory.
    path: PathBuf,

    /// Lock file for exclusive access.
    _lock_file: File,

    /// Recently read or written documents.
    cache: Mutex<LruCache<StorageKey, Vec<u8>>>,
}

impl FileStorage {
    /// Open the storage directory, creating it if allowed.
    pub fn open(path: impl AsRef<Path>, cache_size: usize, create_if_missing: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if !create_if_missing {
                return Err(StoreError::NotInitialized);
            }
            fs::create_dir_all(&path)?;
        }

        let lock_file = Self::acquire_lock(&path)?;
        let cache_size = NonZeroUsize::new(cache_size.max(1)).unwrap_or(NonZeroUsize::MIN);

        Ok(Self {
            path,
            _lock_file: lock_file,
            cache: Mutex::new(LruCache::new(cache_size)),
        })
    }

    /// Base directory of this storage.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full path of the document file for `key`.
    pub fn document_path(&self, key: StorageKey) -> PathBuf {
        self.path.join(format!("{}.{}", key.as_str(), DOC_EXTENSION))
    }

    fn acquire_lock(path: &Path) -> Result<File> {
        let lock_file = File::create(path.join("LOCK"))?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| StoreError::Locked)?;

        Ok(lock_file)
    }

    fn write_document(&self, key: StorageKey, payload: &[u8]) -> Result<()> {
        let final_path = self.document_path(key);
        let tmp_path = final_path.with_extension("tmp");

        let mut file = File::create(&tmp_path)?;
        file.write_all(DOC_MAGIC)?;
        file.write_all(&[DOC_VERSION])?;
        file.write_all(&(payload.len() as u64).to_le_bytes())?;
        file.write_all(payload)?;
        file.write_all(&crc32fast::hash(payload).to_le_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &final_path)?;
        Ok(())
    }

    fn read_document(&self, key: StorageKey) -> Result<Option<Vec<u8>>> {
        let mut file = match File::open(self.document_path(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut magic = [0u8; 4];
        file.read_exact(&mut magic)
            .map_err(|_| StoreError::Corruption(format!("{key}: truncated header")))?;
        if &magic != DOC_MAGIC {
            return Err(StoreError::InvalidFormat(format!("{key}: invalid document magic")));
        }

        let mut version = [0u8; 1];
        file.read_exact(&mut version)
            .map_err(|_| StoreError::Corruption(format!("{key}: truncated header")))?;
        if version[0] != DOC_VERSION {
            return Err(StoreError::InvalidFormat(format!(
                "{key}: unsupported document version {}",
                version[0]
            )));
        }

        let mut len_bytes = [0u8; 8];
        file.read_exact(&mut len_bytes)
            .map_err(|_| StoreError::Corruption(format!("{key}: truncated header")))?;
        let len = u64::from_le_bytes(len_bytes);

        let file_len = file.metadata()?.len();
        // header (13) + payload + checksum (4)
        if len.saturating_add(17) != file_len {
            return Err(StoreError::Corruption(format!(
                "{key}: length {len} does not match file size {file_len}"
            )));
        }

        let mut payload = vec![0u8; len as usize];
        file.read_exact(&mut payload)?;

        let mut checksum_bytes = [0u8; 4];
        file.read_exact(&mut checksum_bytes)?;
        let stored = u32::from_le_bytes(checksum_bytes);
        let computed = crc32fast::hash(&payload);
        if stored != computed {
            return Err(StoreError::ChecksumMismatch {
                expected: stored,
                got: computed,
            });
        }

        Ok(Some(payload))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>> {
        if let Some(cached) = self.cache.lock().get(&key).cloned() {
            return Ok(Some(cached));
        }

        let payload = self.read_document(key)?;
        if let Some(ref bytes) = payload {
            self.cache.lock().put(key, bytes.clone());
        }
        Ok(payload)
    }

    fn set(&self, key: StorageKey, value: &[u8]) -> Result<()> {
        // Drop the cached copy first so a failed write never serves stale data.
        self.cache.lock().pop(&key);
        self.write_document(key, value)?;
        self.cache.lock().put(key, value.to_vec());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        self.cache.lock().pop(&key);
        match fs::remove_file(self.document_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        for key in StorageKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}
