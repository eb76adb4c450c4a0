use crate::defaults::{MOLPRO_COMMENT_PREFIXES, MOLPRO_KEYWORDS};
use crate::molecule::CoordinateList;
use crate::parser::lines::parse_element_line;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // geometry blocks like `geom={...}`, `angstrom; geometry = {...}`. The body ends at the
    // first closing brace.
    static ref GEOMETRY_BLOCK_RE: Regex =
        Regex::new(r"(?is)(?:angstrom|bohr|au)?\s*;?\s*(?:geometry|geom)\s*=\s*\{([^}]*)\}").unwrap();
}

/// True for lines inside of a geometry block that can not hold an atom: comments,
/// unit and symmetry keywords and assignments.
fn is_skipped_line(line: &str) -> bool {
    line.is_empty()
        || line.starts_with(&MOLPRO_COMMENT_PREFIXES[..])
        || MOLPRO_KEYWORDS.contains(&line.to_lowercase().as_str())
        || line.contains('=')
}

/// Parses the body of a single geometry block.
fn parse_geometry_block(body: &str) -> CoordinateList {
    let mut coordinates: CoordinateList = Vec::new();
    for line in body.trim().lines() {
        let line: &str = line.trim();
        if is_skipped_line(line) {
            if !line.is_empty() {
                debug!("Skipping MOLPRO non-coordinate line: {}", line);
            }
            continue;
        }
        match parse_element_line(line) {
            Some(atom) => coordinates.push(atom),
            None => debug!("MOLPRO line in geom block not parsed as coord: '{}'", line),
        }
    }
    coordinates
}

/// Extracts the atoms of a MOLPRO input (.in) or output (.out) file. The geometry
/// blocks are visited in file order and the first one that contains at least one
/// `Element X Y Z` line is used. Z-matrix blocks give no atoms.
pub fn extract_molpro(content: &str) -> CoordinateList {
    for captures in GEOMETRY_BLOCK_RE.captures_iter(content) {
        debug!("Found MOLPRO geometry block.");
        let coordinates: CoordinateList = parse_geometry_block(&captures[1]);
        if !coordinates.is_empty() {
            debug!(
                "Using coordinates from first successfully parsed MOLPRO block ({} atoms).",
                coordinates.len()
            );
            return coordinates;
        }
    }
    debug!("No coordinates extracted from MOLPRO file.");
    Vec::new()
}
