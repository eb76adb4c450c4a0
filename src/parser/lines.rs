use crate::constants::symbol_for;
use crate::defaults::{DELIMITER_DASH_RUN, DELIMITER_MIN_LENGTH};
use crate::molecule::AtomCoordinate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // two (optionally signed) integers, e.g. "0 1" or "-1 2"
    static ref CHARGE_MULTIPLICITY_RE: Regex = Regex::new(r"^[+-]?\d+\s+[+-]?\d+$").unwrap();
}

/// True if the label consists of ASCII letters only. Numeric labels, dummy atoms
/// like "X1" and isotope tags like "C-13" are rejected.
pub fn is_element_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parses a real number, infinite values and NaN are rejected.
pub fn parse_real(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses a line of the form `Element X Y Z`. Additional columns after z are ignored.
/// Returns None if the line is not a coordinate line.
pub fn parse_element_line(line: &str) -> Option<AtomCoordinate> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }
    if !is_element_label(parts[0]) {
        debug!("Invalid element format '{}' in line '{}'", parts[0], line.trim());
        return None;
    }
    let xyz: Vec<f64> = parts[1..4].iter().filter_map(|token| parse_real(token)).collect();
    if xyz.len() != 3 {
        debug!("Could not parse coordinates of input line '{}'", line.trim());
        return None;
    }
    Some(AtomCoordinate::new(parts[0], xyz[0], xyz[1], xyz[2]))
}

/// Parses a line of a Gaussian orientation table:
/// `CenterNumber AtomicNumber AtomicType X Y Z`
/// The atomic number is translated into the element symbol.
pub fn parse_center_line(line: &str) -> Option<AtomCoordinate> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 6 {
        return None;
    }
    let atomic_number: i64 = match parts[1].parse::<i64>() {
        Ok(number) => number,
        Err(_) => {
            debug!("Could not parse atomic number of line '{}'", line.trim());
            return None;
        }
    };
    let xyz: Vec<f64> = parts[3..6].iter().filter_map(|token| parse_real(token)).collect();
    if xyz.len() != 3 {
        debug!("Could not parse coordinates of orientation line '{}'", line.trim());
        return None;
    }
    Some(AtomCoordinate::new(
        &symbol_for(atomic_number),
        xyz[0],
        xyz[1],
        xyz[2],
    ))
}

/// Charge and multiplicity line of a Gaussian input, e.g. "0 1".
pub fn looks_like_charge_multiplicity(line: &str) -> bool {
    CHARGE_MULTIPLICITY_RE.is_match(line.trim())
}

/// A full width separator line made of dashes. Short dashes (minus signs, hyphens)
/// do not count.
pub fn is_structural_delimiter(line: &str) -> bool {
    let line: &str = line.trim();
    line.chars().count() > DELIMITER_MIN_LENGTH && line.contains(&"-".repeat(DELIMITER_DASH_RUN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn element_line() {
        let atom: AtomCoordinate = parse_element_line("  C   0.000000  -1.2345678901234  2.5e-3").unwrap();
        assert_eq!(atom.element, "C");
        assert_eq!(atom.x, 0.0);
        assert_eq!(atom.y, -1.2345678901234);
        assert_eq!(atom.z, 2.5e-3);
        // extra columns are ignored
        let atom: AtomCoordinate = parse_element_line("cl 1.0 2.0 3.0 0 extra").unwrap();
        assert_eq!(atom.element, "Cl");
        assert_abs_diff_eq!(atom.z, 3.0);
    }

    #[test]
    fn element_line_rejects_non_coordinates() {
        assert_eq!(parse_element_line("1 0.0 0.0 0.0"), None);
        assert_eq!(parse_element_line("X1 0.0 0.0 0.0"), None);
        assert_eq!(parse_element_line("C-13 0.0 0.0 0.0"), None);
        assert_eq!(parse_element_line("C 0.0 0.0"), None);
        assert_eq!(parse_element_line("C 0.0 abc 0.0"), None);
        assert_eq!(parse_element_line("C 0.0 inf 0.0"), None);
        assert_eq!(parse_element_line(""), None);
        assert_eq!(parse_element_line("6-31G(d) 0 0 0"), None);
    }

    #[test]
    fn center_line() {
        let atom: AtomCoordinate = parse_center_line("1 6 0 0.000000 0.000000 1.100000").unwrap();
        assert_eq!(atom, AtomCoordinate::new("C", 0.0, 0.0, 1.1));
        let atom: AtomCoordinate = parse_center_line("   7    119   0   1.0  2.0  3.0").unwrap();
        assert_eq!(atom.element, "119");
        assert_eq!(parse_center_line("1 C 0 0.0 0.0 0.0"), None);
        assert_eq!(parse_center_line("1 6 0 0.0 0.0"), None);
        assert_eq!(parse_center_line("Center Number Atomic Type X Y"), None);
    }

    #[test]
    fn charge_multiplicity() {
        assert!(looks_like_charge_multiplicity("0 1"));
        assert!(looks_like_charge_multiplicity("  -1   2  "));
        assert!(looks_like_charge_multiplicity("+1 2"));
        assert!(!looks_like_charge_multiplicity("0 1 0 1 0 1 1"));
        assert!(!looks_like_charge_multiplicity("0"));
        assert!(!looks_like_charge_multiplicity("C 0 1"));
        assert!(!looks_like_charge_multiplicity("0.0 1"));
    }

    #[test]
    fn structural_delimiter() {
        assert!(is_structural_delimiter(
            " ---------------------------------------------------------------------"
        ));
        assert!(!is_structural_delimiter("-----"));
        assert!(!is_structural_delimiter("C   -1.000   -2.000   -3.000000000"));
        assert!(!is_structural_delimiter(""));
        // length is counted in characters, not bytes
        let wide: String = format!("{}-----", "\u{2014}".repeat(10));
        assert!(!is_structural_delimiter(&wide));
        let wide: String = format!("{}-----", "\u{2014}".repeat(16));
        assert!(is_structural_delimiter(&wide));
    }
}
