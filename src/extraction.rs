use crate::io::read_content;
use crate::molecule::CoordinateList;
use crate::parser::{
    check_normal_termination, extract_gaussian_input, extract_gaussian_log, extract_molpro,
    FileKind,
};
use log::{debug, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Extracts the atomic coordinates of a Gaussian (.com, .log) or MOLPRO (.in, .out)
/// file. Unreadable files and files of unknown type give an empty list.
pub fn extract(path: &Path) -> CoordinateList {
    debug!("Starting extraction for: {}", path.display());
    let content: String = match read_content(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("{:#}", err);
            return Vec::new();
        }
    };
    let kind: FileKind = FileKind::from_path(path);
    debug!("Detected file type: {} for {}", kind, path.display());

    let coordinates: CoordinateList = match kind {
        FileKind::GaussianLog => extract_gaussian_log(&content, check_normal_termination(path)),
        FileKind::Unknown => {
            warn!(
                "Unsupported or unrecognized file type for '{}'. Supported types are Gaussian (.com, .log) and MOLPRO (.in, .out).",
                path.display()
            );
            return Vec::new();
        }
        _ => extract_from_content(kind, &content, false),
    };
    if coordinates.is_empty() {
        debug!("No coordinates could be extracted from {} interpreted as {}.", path.display(), kind);
    } else {
        debug!("Successfully parsed {} atoms from {}.", coordinates.len(), path.display());
    }
    coordinates
}

/// Runs the strategy of a file kind on content that is already in memory. The
/// termination status is only used for Gaussian logs.
pub fn extract_from_content(kind: FileKind, content: &str, normal_termination: bool) -> CoordinateList {
    match kind {
        FileKind::GaussianInput => extract_gaussian_input(content),
        FileKind::GaussianLog => extract_gaussian_log(content, normal_termination),
        FileKind::Molpro => extract_molpro(content),
        FileKind::Unknown => Vec::new(),
    }
}

/// Extracts a batch of files. The files are independent of each other and can be
/// processed in parallel, the results keep the order of `paths`.
pub fn extract_all(paths: &[PathBuf], parallel: bool) -> Vec<(PathBuf, CoordinateList)> {
    if parallel {
        paths
            .par_iter()
            .map(|path| (path.clone(), extract(path)))
            .collect()
    } else {
        paths.iter().map(|path| (path.clone(), extract(path))).collect()
    }
}
