//! Content digests for generated files, so an unchanged table is never rewritten.

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

pub fn digest(contents: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(contents);
    let mut array = [0u8; 32];
    array.copy_from_slice(&digest);
    array
}

/// Writes `contents` to `path` unless the file already holds the same bytes. Returns whether the
/// file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> io::Result<bool> {
    match fs::read(path) {
        Ok(existing) if digest(&existing) == digest(contents.as_bytes()) => return Ok(false),
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::aarch64::write_table;
    use hex_literal::hex;

    #[test]
    fn empty_table_digest_is_pinned() {
        assert_eq!(
            digest(write_table(&[]).as_bytes()),
            hex!("72bd245befb8ec3ce12aec6de54007c16a4ae689254a711c6457d6194202cb12")
        );
    }

    #[test]
    fn unchanged_contents_are_not_rewritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("opmap.rs");
        assert!(write_if_changed(&path, "Ops!()").expect("first write"));
        assert!(!write_if_changed(&path, "Ops!()").expect("second write"));
        assert!(write_if_changed(&path, "Ops!(\n)").expect("changed write"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "Ops!(\n)");
    }
}
