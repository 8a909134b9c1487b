//! State of the file input and the upload button bound to it.
//!
//! Only the input's `change` event moves between the two states; a
//! successful upload resets to `NoFileSelected`.

pub const CHOOSE_FILE_LABEL: &str = "파일 선택";
pub const CHOOSE_ANOTHER_LABEL: &str = "다른 파일 선택";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileSelection {
    #[default]
    NoFileSelected,
    FileSelected { name: String, size: u64 },
}

impl FileSelection {
    /// State after a `change` event carrying the first selected file, if any.
    pub fn on_change(file: Option<(String, u64)>) -> Self {
        match file {
            Some((name, size)) => FileSelection::FileSelected { name, size },
            None => FileSelection::NoFileSelected,
        }
    }

    pub fn upload_enabled(&self) -> bool {
        matches!(self, FileSelection::FileSelected { .. })
    }

    pub fn chooser_label(&self) -> &'static str {
        match self {
            FileSelection::NoFileSelected => CHOOSE_FILE_LABEL,
            FileSelection::FileSelected { .. } => CHOOSE_ANOTHER_LABEL,
        }
    }

    /// Name for the "selected file" row; `None` hides the row.
    pub fn selected_name(&self) -> Option<&str> {
        match self {
            FileSelection::NoFileSelected => None,
            FileSelection::FileSelected { name, .. } => Some(name),
        }
    }
}
