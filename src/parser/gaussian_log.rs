use crate::defaults::*;
use crate::molecule::{AtomCoordinate, CoordinateList};
use crate::parser::lines::{is_element_label, is_structural_delimiter, parse_center_line, parse_real};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

lazy_static! {
    static ref STANDARD_ORIENTATION_RE: Regex = Regex::new(r"(?i)standard\s+orientation:").unwrap();
}

// TERMINATION STATUS

/// Checks if the last non-empty line of a Gaussian log reports a normal termination.
/// Only the tail of the file is read. Any I/O error counts as abnormal termination.
pub fn check_normal_termination(path: &Path) -> bool {
    let result: std::io::Result<bool> =
        File::open(path).and_then(|mut file| tail_has_normal_termination(&mut file));
    match result {
        Ok(terminated) => terminated,
        Err(err) => {
            warn!("Error checking termination status for '{}': {}", path.display(), err);
            false
        }
    }
}

/// Reads at most `TERMINATION_TAIL_BYTES` from the end of the reader and tests the
/// last non-empty line for "Normal termination".
pub fn tail_has_normal_termination<R: Read + Seek>(reader: &mut R) -> std::io::Result<bool> {
    let size: u64 = reader.seek(SeekFrom::End(0))?;
    let buffer_size: u64 = TERMINATION_TAIL_BYTES.min(size);
    reader.seek(SeekFrom::Start(size - buffer_size))?;
    let mut tail: Vec<u8> = Vec::with_capacity(buffer_size as usize);
    reader.read_to_end(&mut tail)?;
    // the window may start in the middle of a multi-byte character
    let tail: String = String::from_utf8_lossy(&tail).into_owned();
    Ok(last_line_is_normal_termination(&tail))
}

/// Tests the last non-empty line of a text for "Normal termination".
pub fn last_line_is_normal_termination(text: &str) -> bool {
    text.trim()
        .lines()
        .last()
        .map_or(false, |line| line.contains(NORMAL_TERMINATION))
}

// PUNCH STRING

/// Reassembles the archive entry (punch string) that Gaussian writes directly above
/// "The archive entry for this job was punched.".
///
/// The lines above the marker are scanned bottom-up. Lines containing a backslash
/// are collected; once collection has started, an empty line or a line without a
/// backslash ends the scan. The collected lines are trimmed and joined in file
/// order. Returns None if the marker or the archive lines are missing.
pub fn find_punch_string(content: &str) -> Option<String> {
    let marker_idx: usize = match content.find(PUNCH_MARKER) {
        Some(idx) => idx,
        None => {
            debug!("Punch marker not found in file content.");
            return None;
        }
    };
    let mut punch_lines: Vec<&str> = Vec::new();
    for line in content[..marker_idx].trim().lines().rev() {
        let line: &str = line.trim();
        let started: bool = !punch_lines.is_empty();
        if line.is_empty() {
            if started {
                break;
            }
            continue;
        }
        if line.contains('\\') {
            punch_lines.push(line);
        } else if started {
            break;
        }
    }
    if punch_lines.is_empty() {
        debug!("No punch lines with backslashes found before marker.");
        return None;
    }
    punch_lines.reverse();
    Some(punch_lines.concat())
}

/// Extracts the final geometry from the archive entry of a Gaussian log.
///
/// All whitespace of the punch string is removed and it is split into sections at
/// every double backslash. The fourth section holds the atoms as `El,X,Y,Z` entries
/// separated by single backslashes. Malformed entries (the leading charge and
/// multiplicity entry among them) are skipped.
pub fn extract_from_punch(content: &str) -> CoordinateList {
    let punch: String = match find_punch_string(content) {
        Some(punch) => punch,
        None => return Vec::new(),
    };
    let punch: String = punch.chars().filter(|c| !c.is_whitespace()).collect();
    let sections: Vec<&str> = punch.split("\\\\").collect();
    if sections.len() <= PUNCH_COORDINATE_SECTION {
        debug!(
            "Insufficient sections ({}) in punch string. Expected at least {}.",
            sections.len(),
            PUNCH_COORDINATE_SECTION + 1
        );
        return Vec::new();
    }
    let coordinate_section: &str = sections[PUNCH_COORDINATE_SECTION];
    if coordinate_section.is_empty() {
        debug!("Empty coordinate section in punch string.");
        return Vec::new();
    }
    debug!("Punch coordinate section identified.");

    coordinate_section
        .split('\\')
        .filter(|entry| !entry.is_empty())
        .filter_map(parse_punch_entry)
        .collect()
}

/// Parses one `El,X,Y,Z` entry of the archive entry.
fn parse_punch_entry(entry: &str) -> Option<AtomCoordinate> {
    let fields: Vec<&str> = entry.split(',').collect();
    if fields.len() != 4 {
        debug!(
            "Malformed punch entry '{}', expected 4 parts (El,X,Y,Z). Found {}.",
            entry,
            fields.len()
        );
        return None;
    }
    let element: &str = fields[0].trim();
    if !is_element_label(element) {
        debug!("Invalid element '{}' in punch entry '{}'", element, entry);
        return None;
    }
    match (parse_real(fields[1]), parse_real(fields[2]), parse_real(fields[3])) {
        (Some(x), Some(y), Some(z)) => Some(AtomCoordinate::new(element, x, y, z)),
        _ => {
            debug!("Could not parse numeric parts of punch entry '{}'", entry);
            None
        }
    }
}

// STANDARD ORIENTATION

/// Position within a standard orientation table. The table is framed by three
/// separator lines: above the header, below the header and below the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationState {
    BeforeFirstDelimiter,
    InHeaderZone,
    InDataZone,
    Done,
}

impl OrientationState {
    /// Separator lines are the only transitions between the states.
    pub fn next(self) -> Self {
        match self {
            OrientationState::BeforeFirstDelimiter => OrientationState::InHeaderZone,
            OrientationState::InHeaderZone => OrientationState::InDataZone,
            OrientationState::InDataZone | OrientationState::Done => OrientationState::Done,
        }
    }
}

/// Extracts the atoms of the last "Standard orientation:" table of a Gaussian log.
/// Optimizations print one table per step, only the final one is used.
pub fn extract_from_standard_orientation(content: &str) -> CoordinateList {
    let last_match = match STANDARD_ORIENTATION_RE.find_iter(content).enumerate().last() {
        Some((idx, found)) => {
            debug!("Found {} 'Std orient' section(s), using last.", idx + 1);
            found
        }
        None => {
            debug!("No 'Standard orientation' section found.");
            return Vec::new();
        }
    };

    let mut coordinates: CoordinateList = Vec::new();
    let mut state: OrientationState = OrientationState::BeforeFirstDelimiter;
    for line in content[last_match.end()..].split('\n') {
        let line: &str = line.trim();
        if is_structural_delimiter(line) {
            state = state.next();
            if state == OrientationState::Done {
                debug!("Found third dash line, stopping std orient parse.");
                break;
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        match state {
            OrientationState::InHeaderZone => {
                if ORIENTATION_HEADER_KEYWORDS.iter().any(|keyword| line.contains(keyword)) {
                    debug!("Skipping header line: {}", line);
                }
            }
            OrientationState::InDataZone => {
                if let Some(atom) = parse_center_line(line) {
                    coordinates.push(atom);
                }
            }
            OrientationState::BeforeFirstDelimiter | OrientationState::Done => {}
        }
    }
    debug!("Extracted {} atoms from 'Std orient'.", coordinates.len());
    coordinates
}

// STRATEGY

/// Extracts the final geometry of a Gaussian log. For a normally terminated job the
/// archive entry is used; the last standard orientation table is the fallback and the
/// only source for jobs that did not finish.
pub fn extract_gaussian_log(content: &str, normal_termination: bool) -> CoordinateList {
    if !normal_termination {
        debug!("Gaussian log: Normal termination not found. Using standard orientation.");
        return extract_from_standard_orientation(content);
    }
    debug!("Gaussian log: Normal termination. Trying punch string.");
    let coordinates: CoordinateList = extract_from_punch(content);
    if !coordinates.is_empty() {
        return coordinates;
    }
    if content.contains(PUNCH_MARKER) {
        debug!("Punch string found but no coords parsed, trying standard orientation as fallback.");
    } else {
        debug!("Punch string not found, trying standard orientation.");
    }
    extract_from_standard_orientation(content)
}
