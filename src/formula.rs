use crate::molecule::{normalize_symbol, AtomCoordinate};
use hashbrown::HashMap;
use itertools::Itertools;

/// Rank of an element in the Hill system: carbon first, hydrogen second, all other
/// elements follow in alphabetical order.
fn hill_rank(symbol: &str) -> u8 {
    match symbol {
        "C" => 0,
        "H" => 1,
        _ => 2,
    }
}

/// Builds the molecular formula (e.g. "C2H6O") of a list of atoms. Counts of one are
/// omitted, an empty list gives an empty string.
pub fn formula(coordinates: &[AtomCoordinate]) -> String {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for atom in coordinates.iter() {
        *counts.entry(normalize_symbol(&atom.element)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .sorted_by(|(a, _), (b, _)| (hill_rank(a), a).cmp(&(hill_rank(b), b)))
        .map(|(symbol, count)| match count {
            1 => symbol,
            n => format!("{}{}", symbol, n),
        })
        .collect()
}
