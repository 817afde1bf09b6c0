//! Loading instruction lines from a command file.

use crate::config::MAX_FILE_SIZE;
use crate::error::SourceError;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// The instruction lines of a command file, trimmed, with blank lines dropped.
#[derive(Debug, Clone)]
pub struct CommandFile {
    path: PathBuf,
    commands: Vec<String>,
}

impl CommandFile {
    /// Read and validate a command file.
    ///
    /// The file must exist and be readable, have a name without an extension, be no
    /// larger than [`MAX_FILE_SIZE`] and contain UTF-8 text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(SourceError::Missing);
        }

        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound(path.to_path_buf()));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(SourceError::NotReadable(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(SourceError::NotReadable(path.to_path_buf()));
        }

        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(SourceError::NotReadable(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let has_extension = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().contains('.'));
        if has_extension {
            return Err(SourceError::InvalidName(path.to_path_buf()));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(SourceError::TooLarge {
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut bytes)?;
        let text =
            String::from_utf8(bytes).map_err(|_| SourceError::NotText(path.to_path_buf()))?;

        let commands = split_instructions(&text);
        info!(
            "Successfully parsed {} commands from {}",
            commands.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            commands,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<String> {
        self.commands
    }
}

/// Trim each line and drop the empty ones.
pub fn split_instructions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_load_trims_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "commands",
            b"  PLACE 1,2,EAST  \n\nMOVE\n  \t \n  LEFT  \r\nREPORT",
        );

        let file = CommandFile::load(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert_eq!(
            file.commands(),
            ["PLACE 1,2,EAST", "MOVE", "LEFT", "REPORT"]
        );
    }

    #[test]
    fn test_empty_path_is_missing() {
        assert!(matches!(CommandFile::load(""), Err(SourceError::Missing)));
    }

    #[test]
    fn test_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandFile::load(dir.path().join("nonexistent_file")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandFile::load(dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::NotReadable(_)));
    }

    #[test]
    fn test_file_with_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "commands.txt", b"PLACE 1,2,EAST\n");
        let err = CommandFile::load(path).unwrap_err();
        assert!(matches!(err, SourceError::InvalidName(_)));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let content = vec![b'A'; MAX_FILE_SIZE as usize + 1];
        let path = write_file(&dir, "large", &content);
        match CommandFile::load(path) {
            Err(SourceError::TooLarge { size, limit }) => {
                assert_eq!(size, MAX_FILE_SIZE + 1);
                assert_eq!(limit, MAX_FILE_SIZE);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_binary_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "image", &[0x89, 0x50, 0x4E, 0x47]);
        let err = CommandFile::load(path).unwrap_err();
        assert!(matches!(err, SourceError::NotText(_)));
        assert!(err.to_string().contains("must be a plain text file"));
    }

    #[test]
    fn test_split_instructions() {
        assert_eq!(split_instructions(""), Vec::<String>::new());
        assert_eq!(split_instructions("MOVE\n\n REPORT \n"), ["MOVE", "REPORT"]);
    }
}
