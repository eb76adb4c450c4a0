use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the whole file. Bytes that are not valid UTF-8 are replaced, so that a
/// single broken character does not hide the coordinates of a large output file.
pub fn read_content(path: &Path) -> Result<String> {
    let bytes: Vec<u8> = fs::read(path)
        .with_context(|| format!("Error reading file '{}'", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Turns the file arguments of the command line into a sorted list of distinct files.
/// Arguments containing glob metacharacters (`*`, `?`, `[`) that do not name a file
/// themselves are expanded. Other arguments that do not name an existing file are
/// reported and dropped.
pub fn resolve_paths<S: AsRef<str>>(arguments: &[S]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for argument in arguments.iter() {
        let argument: &str = argument.as_ref();
        let path: &Path = Path::new(argument);
        if path.is_file() {
            paths.push(path.to_path_buf());
        } else if is_pattern(argument) {
            paths.extend(expand_pattern(argument));
        } else if path.exists() {
            warn!("Not a regular file: {}", argument);
        } else {
            warn!("Specified file not found: {}", argument);
        }
    }
    paths.sort();
    paths.dedup();
    paths
}

fn is_pattern(argument: &str) -> bool {
    argument.contains(|c: char| c == '*' || c == '?' || c == '[')
}

/// Regular files matching the pattern. Unreadable entries are skipped.
fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let entries = match glob::glob(pattern) {
        Ok(entries) => entries,
        Err(error) => {
            warn!("Invalid glob pattern '{}': {}", pattern, error);
            return Vec::new();
        }
    };
    let matches: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(error) => {
                debug!("Skipping unreadable glob match: {}", error);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    if matches.is_empty() {
        debug!("No files match pattern '{}'", pattern);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = read_content(Path::new("/nonexistent/qcgeom/job.com")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/qcgeom/job.com"));
    }

    #[test]
    fn paths_are_sorted_and_unique() {
        let manifest: String = String::from(env!("CARGO_MANIFEST_DIR"));
        let cargo: String = format!("{}/Cargo.toml", manifest);
        let lib: String = format!("{}/src/lib.rs", manifest);
        let arguments: Vec<String> = vec![
            lib.clone(),
            cargo.clone(),
            lib.clone(),
            format!("{}/does_not_exist.log", manifest),
            format!("{}/src", manifest),
        ];
        let paths: Vec<PathBuf> = resolve_paths(&arguments);
        assert_eq!(paths, vec![PathBuf::from(cargo), PathBuf::from(lib)]);
    }

    #[test]
    fn patterns_are_expanded() {
        let files: String = format!("{}/tests/files", env!("CARGO_MANIFEST_DIR"));
        let arguments: Vec<String> = vec![
            format!("{}/water_opt.log", files),
            format!("{}/*.log", files),
            format!("{}/*.nothing", files),
            format!("{}/[", files),
        ];
        let paths: Vec<PathBuf> = resolve_paths(&arguments);
        let names: Vec<&str> = paths
            .iter()
            .filter_map(|path| path.file_name())
            .filter_map(|name| name.to_str())
            .collect();
        assert_eq!(names, vec!["water_aborted.log", "water_bad_punch.log", "water_opt.log"]);
    }
}
