use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::error::Result;

/// https://core.telegram.org/bots/api#sending-files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    /// Downloaded by the client and re-uploaded.
    Url(Url),

    /// Local file, uploaded as is.
    Path(PathBuf),

    /// File that already exists on the Telegram servers.
    FileId(String),
}

impl InputFile {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn file_id(file_id: impl Into<String>) -> Self {
        Self::FileId(file_id.into())
    }
}

impl From<&str> for InputFile {
    /// Remote URLs become [`InputFile::Url`], anything else is a local path.
    fn from(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if url.has_host() => Self::Url(url),
            _ => Self::Path(PathBuf::from(source)),
        }
    }
}

impl From<String> for InputFile {
    fn from(source: String) -> Self {
        Self::from(source.as_str())
    }
}

impl From<Url> for InputFile {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<PathBuf> for InputFile {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for InputFile {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Url(url) => serializer.serialize_str(url.as_str()),
            Self::Path(path) => serializer.serialize_str(&path.to_string_lossy()),
            Self::FileId(file_id) => serializer.serialize_str(file_id),
        }
    }
}

/// Downloaded upload source, removed from disk when dropped.
pub(crate) struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Creates an empty uniquely named file in the directory.
    pub fn create(directory: &Path) -> Result<(Self, fs::File)> {
        fs::create_dir_all(directory)?;
        let this = Self {
            path: directory.join(Uuid::new_v4().simple().to_string()),
        };
        debug!(path = ?this.path, "staging the upload…");
        let file = fs::File::create(&this.path)?;
        Ok((this, file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_extension(&mut self, extension: &str) -> Result<()> {
        let renamed = self.path.with_extension(extension);
        fs::rename(&self.path, &renamed)?;
        self.path = renamed;
        Ok(())
    }

    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = ?self.path, "removed the staged upload"),
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => warn!(path = ?self.path, "failed to remove the staged upload: {:#}", error),
        }
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
