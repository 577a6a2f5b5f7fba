use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{LinescribeError, Result};

/// Replace `path` with `bytes` in one step.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so a concurrent reader sees either the old file or
/// the complete new one. On failure the temporary file is removed.
///
/// A replaced file keeps its permissions; a new one gets the same mode a plain
/// create would (0o666 less the umask on unix).
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let write_err = |e: std::io::Error| {
        LinescribeError::Write(format!("Failed to write {}: {e}", path.display()))
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".linescribe");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Passed to open(2), so the umask still applies
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(parent).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(existing) = std::fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        }
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Output persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text_lines.csv");

        write_atomic(&path, b"Line Number,Text\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"Line Number,Text\n");
    }

    #[test]
    fn test_overwrites_existing_file_fully() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        std::fs::write(&path, "a much longer previous body that must disappear").unwrap();

        write_atomic(&path, b"{}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_atomic(&path, b"x").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_matches_plain_create() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.csv");
        std::fs::write(&plain, b"x").unwrap();

        let atomic = dir.path().join("atomic.csv");
        write_atomic(&atomic, b"x").unwrap();

        assert_eq!(mode_of(&atomic), mode_of(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        for mode in [0o644, 0o640] {
            let path = dir.path().join(format!("result_{mode:o}.json"));
            std::fs::write(&path, b"old").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();

            write_atomic(&path, b"{}\n").unwrap();

            assert_eq!(mode_of(&path), mode);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
        }
    }

    #[test]
    fn test_missing_parent_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_atomic(&path, b"x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(!path.exists());
    }

    #[test]
    fn test_directory_target_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("taken");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let err = write_atomic(&target, b"x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
    }
}
