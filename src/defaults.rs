// GAUSSIAN LOG FILES
// only this many bytes at the end of a log are read to check the termination status
pub const TERMINATION_TAIL_BYTES: u64 = 1000;
// the last non-empty line of a successful job contains this phrase
pub const NORMAL_TERMINATION: &str = "Normal termination";
// printed directly after the archive entry (punch string) of a finished job
pub const PUNCH_MARKER: &str = "The archive entry for this job was punched.";
// the coordinates are stored in this section of the archive entry (sections are
// separated by a double backslash)
pub const PUNCH_COORDINATE_SECTION: usize = 3;
// column headers of the standard orientation table
pub const ORIENTATION_HEADER_KEYWORDS: [&str; 5] = ["Center", "Number", "Atomic", "Coordinates", "Type"];
// a separator line needs a run of dashes of this length ...
pub const DELIMITER_DASH_RUN: usize = 5;
// ... and must be longer than this
pub const DELIMITER_MIN_LENGTH: usize = 20;

// MOLPRO FILES
// lines inside of a geometry block that only set units or symmetry
pub const MOLPRO_KEYWORDS: [&str; 4] = ["angstrom", "bohr", "au", "symmetry"];
// prefixes of comment lines inside of a geometry block
pub const MOLPRO_COMMENT_PREFIXES: [char; 3] = ['#', '!', '*'];

// FILE TYPES
pub const GAUSSIAN_INPUT_EXTENSIONS: [&str; 1] = ["com"];
pub const GAUSSIAN_LOG_EXTENSIONS: [&str; 1] = ["log"];
pub const MOLPRO_EXTENSIONS: [&str; 2] = ["in", "out"];

// OUTPUT
// config file
pub const CONFIG_FILE_NAME: &str = "qcgeom.toml";
// output format: table, csv or json
pub const OUTPUT_FORMAT: &str = "table";
// print only the summary line of each file
pub const COMPACT: bool = false;
// number of digits after the decimal point
pub const PRECISION: usize = 10;
// extract the files of a batch in parallel
pub const PARALLEL: bool = true;
