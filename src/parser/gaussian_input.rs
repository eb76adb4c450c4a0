use crate::molecule::{AtomCoordinate, CoordinateList};
use crate::parser::lines::{looks_like_charge_multiplicity, parse_element_line};
use log::debug;

/// Extracts the molecule specification of a Gaussian input file (.com).
///
/// The atom list starts after the first charge/multiplicity line and ends at the
/// first blank line or at the first line that is not an `Element X Y Z` line (e.g. a
/// basis set or a variable section). Files without a charge/multiplicity line give
/// an empty list. Only the first molecule specification is read.
pub fn extract_gaussian_input(content: &str) -> CoordinateList {
    let lines: Vec<&str> = content.lines().collect();
    let start: usize = match lines
        .iter()
        .position(|line| looks_like_charge_multiplicity(line))
    {
        Some(idx) => {
            debug!("Found chg/mult line at index {}: '{}'", idx, lines[idx].trim());
            idx + 1
        }
        None => {
            debug!("No chg/mult line found. Cannot reliably parse .com coordinates.");
            return Vec::new();
        }
    };

    let mut coordinates: CoordinateList = Vec::new();
    for line in lines[start..].iter() {
        let line: &str = line.trim();
        if line.is_empty() {
            debug!("Empty line after chg/mult, end of coordinate block");
            break;
        }
        match parse_element_line(line) {
            Some(atom) => coordinates.push(atom),
            None => {
                debug!("Stopping .com coordinate parsing at non-coordinate line: '{}'", line);
                break;
            }
        }
    }
    debug!("Extracted {} atoms from Gaussian input file.", coordinates.len());
    coordinates
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHANE: &str = "%chk=methane.chk
#p hf/sto-3g opt

methane optimization

0 1
C    0.000000    0.000000    0.000000
H    0.629118    0.629118    0.629118
H   -0.629118   -0.629118    0.629118
H   -0.629118    0.629118   -0.629118
H    0.629118   -0.629118   -0.629118

";

    #[test]
    fn methane_input() {
        let coordinates: CoordinateList = extract_gaussian_input(METHANE);
        assert_eq!(coordinates.len(), 5);
        assert_eq!(coordinates[0], AtomCoordinate::new("C", 0.0, 0.0, 0.0));
        assert_eq!(coordinates[4], AtomCoordinate::new("H", 0.629118, -0.629118, -0.629118));
    }

    #[test]
    fn block_ends_at_unrelated_section() {
        let content: &str = "#p b3lyp/gen\n\ntitle\n\n-1 2\nO 0.0 0.0 0.0\nH 0.0 0.0 0.96\nC 0\n6-31G*\n****\n";
        let coordinates: CoordinateList = extract_gaussian_input(content);
        assert_eq!(coordinates.len(), 2);
        assert_eq!(coordinates[1].element, "H");
    }

    #[test]
    fn z_matrix_input_gives_nothing() {
        let content: &str = "#p hf\n\ntitle\n\n0 1\nC\nH 1 1.09\n\n";
        assert!(extract_gaussian_input(content).is_empty());
    }

    #[test]
    fn missing_charge_multiplicity_line() {
        let content: &str = "#p hf\n\ntitle\n\nC 0.0 0.0 0.0\nH 0.0 0.0 1.0\n\n";
        assert!(extract_gaussian_input(content).is_empty());
    }

    #[test]
    fn only_first_molecule_is_read() {
        let content: &str = "#p hf\n\ntitle\n\n0 1\nHe 0.0 0.0 0.0\n\n0 1\nNe 1.0 0.0 0.0\n\n";
        let coordinates: CoordinateList = extract_gaussian_input(content);
        assert_eq!(coordinates, vec![AtomCoordinate::new("He", 0.0, 0.0, 0.0)]);
    }
}
