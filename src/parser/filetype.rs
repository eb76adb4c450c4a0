use crate::defaults::{GAUSSIAN_INPUT_EXTENSIONS, GAUSSIAN_LOG_EXTENSIONS, MOLPRO_EXTENSIONS};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Kind of a quantum chemistry file, decided by the file extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    GaussianInput,
    GaussianLog,
    Molpro,
    Unknown,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        match get_extension_from_path(path) {
            Some(extension) => FileKind::from_extension(&extension),
            None => FileKind::Unknown,
        }
    }

    /// Extension without the leading dot, case insensitive.
    pub fn from_extension(extension: &str) -> Self {
        let extension: String = extension.to_lowercase();
        let extension: &str = extension.as_str();
        if GAUSSIAN_INPUT_EXTENSIONS.contains(&extension) {
            FileKind::GaussianInput
        } else if GAUSSIAN_LOG_EXTENSIONS.contains(&extension) {
            FileKind::GaussianLog
        } else if MOLPRO_EXTENSIONS.contains(&extension) {
            FileKind::Molpro
        } else {
            FileKind::Unknown
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            FileKind::GaussianInput => "gaussian_input",
            FileKind::GaussianLog => "gaussian_log",
            FileKind::Molpro => "molpro",
            FileKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

fn get_extension_from_path(path: &Path) -> Option<String> {
    path.extension().and_then(OsStr::to_str).map(String::from)
}
