//! # On-Disk Backend
//!
//! One file per key under a root directory. Topics are arbitrary strings,
//! so the key is hex-encoded into the filename (`{hex(key)}.rec`); the
//! reverse decoding during enumeration also screens out foreign files
//! dropped into the directory.
//!
//! Writes go through a temporary file followed by a rename, which is the
//! atomicity the backend contract promises for a single key on a POSIX
//! filesystem.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::backend::KeyValueBackend;
use crate::error::StoreError;

const RECORD_EXT: &str = "rec";

/// Filesystem key-value backend, one record file per key.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root directory of this backend.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{RECORD_EXT}", hex_encode(key.as_bytes())))
    }
}

impl KeyValueBackend for FileBackend {
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // Foreign files whose stem is not our hex key encoding are skipped.
            let Some(key) = hex_decode(stem).and_then(|b| String::from_utf8(b).ok()) else {
                continue;
            };
            // An unreadable record hides only itself, not the rest of
            // the namespace.
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable record file");
                    continue;
                }
            };
            out.push((key, bytes));
        }
        Ok(out)
    }
}

// ─── Filename hex encoding (no external hex crate dependency) ────────

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    // Byte-pair slicing below requires ASCII; a non-ASCII stem is a
    // foreign file, not a key.
    if !hex.is_ascii() || hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("plink-file-backend-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn test_set_get_roundtrip() {
        let backend = FileBackend::new(temp_root("roundtrip")).unwrap();
        backend.set("topic/with:odd chars", b"payload").unwrap();
        assert_eq!(
            backend.get("topic/with:odd chars").unwrap(),
            Some(b"payload".to_vec())
        );
    }

    #[test]
    fn test_get_absent() {
        let backend = FileBackend::new(temp_root("absent")).unwrap();
        assert_eq!(backend.get("missing").unwrap(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let backend = FileBackend::new(temp_root("remove")).unwrap();
        backend.set("a", b"1").unwrap();
        backend.remove("a").unwrap();
        backend.remove("a").unwrap();
        assert_eq!(backend.get("a").unwrap(), None);
    }

    #[test]
    fn test_entries_skips_foreign_files() {
        let backend = FileBackend::new(temp_root("foreign")).unwrap();
        backend.set("a", b"1").unwrap();
        std::fs::write(backend.root().join("not-hex.rec"), b"junk").unwrap();
        std::fs::write(backend.root().join("README.txt"), b"junk").unwrap();
        let entries = backend.entries().unwrap();
        assert_eq!(entries, vec![("a".to_string(), b"1".to_vec())]);
    }

    #[test]
    fn test_entries_skips_non_ascii_stem_of_even_byte_length() {
        // "aéb" is 4 bytes but not ASCII; it must be treated as a
        // foreign file, not sliced as hex pairs.
        let backend = FileBackend::new(temp_root("unicode")).unwrap();
        backend.set("a", b"1").unwrap();
        std::fs::write(backend.root().join("a\u{e9}b.rec"), b"junk").unwrap();
        let entries = backend.entries().unwrap();
        assert_eq!(entries, vec![("a".to_string(), b"1".to_vec())]);
    }

    #[test]
    fn test_entries_skips_unreadable_record_file() {
        // A directory with a record-shaped name fails `fs::read`; it
        // must hide only itself, not the healthy records beside it.
        let backend = FileBackend::new(temp_root("unreadable")).unwrap();
        backend.set("a", b"1").unwrap();
        let blocked = backend.root().join(format!("{}.rec", hex_encode(b"b")));
        std::fs::create_dir(&blocked).unwrap();

        let entries = backend.entries().unwrap();
        assert_eq!(entries, vec![("a".to_string(), b"1".to_vec())]);
    }

    #[test]
    fn test_hex_decode_rejects_non_ascii() {
        assert_eq!(hex_decode("a\u{e9}b"), None);
    }

    #[test]
    fn test_hex_key_roundtrip() {
        let key = "wc:topic@2";
        assert_eq!(
            hex_decode(&hex_encode(key.as_bytes())),
            Some(key.as_bytes().to_vec())
        );
    }
}
