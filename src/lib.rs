//! Extraction of cartesian coordinates from Gaussian (.com, .log) and MOLPRO
//! (.in, .out) files.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let atoms = qcgeom::extract(Path::new("opt.log"));
//! println!("{}", qcgeom::formula(&atoms));
//! ```
pub mod constants;
pub mod defaults;
pub mod extraction;
pub mod formula;
pub mod io;
pub mod molecule;
pub mod parser;

pub use constants::{atomic_number_for, symbol_for};
pub use extraction::{extract, extract_all, extract_from_content};
pub use formula::formula;
pub use molecule::{AtomCoordinate, CoordinateList};
pub use parser::FileKind;
