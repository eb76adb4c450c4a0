use crate::constants::atomic_number_for;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered list of atoms as found in one file. The order of the atoms reflects the
/// order in the file and is never changed.
pub type CoordinateList = Vec<AtomCoordinate>;

/// `AtomCoordinate` type that holds the element symbol and the cartesian position of a
/// single atom. The coordinates are stored in the unit used by the source file, no
/// conversion is done.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AtomCoordinate {
    /// Element symbol, single letters upper case, longer symbols in title case
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AtomCoordinate {
    /// Create a new `AtomCoordinate`. The element symbol is normalized ("cl" -> "Cl").
    pub fn new(element: &str, x: f64, y: f64, z: f64) -> Self {
        AtomCoordinate {
            element: normalize_symbol(element),
            x,
            y,
            z,
        }
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Atomic number of the element, None if the label is not an element symbol.
    pub fn atomic_number(&self) -> Option<u8> {
        atomic_number_for(&self.element)
    }
}

/// Brings an element symbol into its canonical spelling. The first character is upper
/// case, all following characters are lower case.
pub fn normalize_symbol(symbol: &str) -> String {
    let symbol: &str = symbol.trim();
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Stacks the positions of all atoms into a matrix of shape (n_atoms, 3).
pub fn positions(coordinates: &[AtomCoordinate]) -> Array2<f64> {
    let mut positions: Array2<f64> = Array2::zeros((coordinates.len(), 3));
    for (mut row, atom) in positions.outer_iter_mut().zip(coordinates.iter()) {
        row.assign(&arr1(&atom.position()));
    }
    positions
}

/// Atomic numbers of all atoms in file order.
pub fn atomic_numbers(coordinates: &[AtomCoordinate]) -> Vec<Option<u8>> {
    coordinates.iter().map(AtomCoordinate::atomic_number).collect()
}
