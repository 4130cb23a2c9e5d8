use std::fmt;

/// File type string of the container the browser player can stream.
pub const MP4_FILE_TYPE: &str = "mp4";

/// A file that belongs to a catalog item (video, subtitle, artwork).
///
/// `path` is relative to the media root; an empty path means the scraper did
/// not find the file.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FileData {
    pub name: String,
    pub path: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub file_type: String,
}

impl FileData {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            file_type: file_type.into(),
        }
    }

    /// True when the record points at no file at all.
    pub fn is_missing(&self) -> bool {
        self.path.is_empty()
    }

    /// First file whose type matches `file_type` exactly.
    pub fn find_type<'a>(
        files: &'a [FileData],
        file_type: &str,
    ) -> Option<&'a FileData> {
        files.iter().find(|file| file.file_type == file_type)
    }

    /// First file the browser player can stream.
    pub fn find_playable(files: &[FileData]) -> Option<&FileData> {
        Self::find_type(files, MP4_FILE_TYPE)
    }
}

impl fmt::Debug for FileData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileData")
            .field("path", &self.path)
            .field("type", &self.file_type)
            .finish()
    }
}
