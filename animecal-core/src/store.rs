//! Reading and writing the calendar file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{AnimecalError, AnimecalResult};

pub fn read_calendar_file(path: &Path) -> AnimecalResult<String> {
    if !path.is_file() {
        return Err(AnimecalError::FileNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Replace `path` with `content`.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over the target, so readers see either the old or the new file.
/// An existing target keeps its permissions.
pub fn write_atomic(path: &Path, content: &str) -> AnimecalResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AnimecalError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.ics");

        let err = read_calendar_file(&path).unwrap_err();
        assert!(matches!(err, AnimecalError::FileNotFound(ref p) if p == &path));
        assert!(err.to_string().contains("main.ics"));
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.ics");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").unwrap();

        assert_eq!(
            read_calendar_file(&path).unwrap(),
            "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"
        );
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "No temp files should remain");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.ics");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, "new").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_atomic_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main_outlook.ics");

        write_atomic(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
