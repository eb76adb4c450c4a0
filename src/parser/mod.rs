mod filetype;
mod gaussian_input;
mod gaussian_log;
pub mod lines;
mod molpro;

pub use filetype::FileKind;
pub use gaussian_input::extract_gaussian_input;
pub use gaussian_log::{
    check_normal_termination, extract_from_punch, extract_from_standard_orientation,
    extract_gaussian_log, find_punch_string, last_line_is_normal_termination,
    tail_has_normal_termination, OrientationState,
};
pub use lines::{
    is_structural_delimiter, looks_like_charge_multiplicity, parse_center_line,
    parse_element_line,
};
pub use molpro::extract_molpro;
