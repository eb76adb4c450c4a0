use approx::assert_abs_diff_eq;
use qcgeom::io::{render, Configuration, OutputFormat};
use qcgeom::molecule::positions;
use qcgeom::parser::check_normal_termination;
use qcgeom::{extract, extract_all, formula, AtomCoordinate, CoordinateList};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("files")
        .join(name)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn gaussian_input() {
    init_logger();
    let coordinates: CoordinateList = extract(&fixture("methane.com"));
    assert_eq!(coordinates.len(), 5);
    assert_eq!(formula(&coordinates), "CH4");
    assert_eq!(coordinates[0], AtomCoordinate::new("C", 0.0, 0.0, 0.0));
    assert_abs_diff_eq!(coordinates[2].x, -0.629118, epsilon = 1e-12);
}

#[test]
fn gaussian_log_uses_punch_string() {
    init_logger();
    let path: PathBuf = fixture("water_opt.log");
    assert!(check_normal_termination(&path));
    let coordinates: CoordinateList = extract(&path);
    assert_eq!(
        coordinates,
        vec![
            AtomCoordinate::new("O", 0.0, 0.0, 0.1274197),
            AtomCoordinate::new("H", 0.0, 0.7516829, -0.5096788),
            AtomCoordinate::new("H", 0.0, -0.7516829, -0.5096788),
        ]
    );
}

#[test]
fn gaussian_log_falls_back_to_standard_orientation() {
    init_logger();
    let path: PathBuf = fixture("water_bad_punch.log");
    assert!(check_normal_termination(&path));
    let coordinates: CoordinateList = extract(&path);
    assert_eq!(coordinates.len(), 3);
    assert_eq!(coordinates[0], AtomCoordinate::new("O", 0.0, 0.0, 0.127420));
    assert_eq!(coordinates[1].element, "H");
}

#[test]
fn aborted_gaussian_log_uses_last_standard_orientation() {
    init_logger();
    let path: PathBuf = fixture("water_aborted.log");
    assert!(!check_normal_termination(&path));
    let coordinates: CoordinateList = extract(&path);
    assert_eq!(formula(&coordinates), "H2O");
    assert_eq!(coordinates[1], AtomCoordinate::new("H", 0.0, 0.751683, -0.509679));
    // the first optimization step must not leak into the result
    assert!(coordinates.iter().all(|atom| atom.z != 0.117790));
}

#[test]
fn molpro_input() {
    init_logger();
    let coordinates: CoordinateList = extract(&fixture("water.in"));
    let expected: ndarray::Array2<f64> = ndarray::array![
        [0.000000, 0.000000, 0.117790],
        [0.000000, 0.755453, -0.471161],
        [0.000000, -0.755453, -0.471161]
    ];
    assert_abs_diff_eq!(positions(&coordinates), expected, epsilon = 1e-12);
    assert_eq!(formula(&coordinates), "H2O");
}

#[test]
fn molpro_output_skips_zmatrix_block() {
    init_logger();
    let coordinates: CoordinateList = extract(&fixture("zmatrix_first.out"));
    assert_eq!(coordinates.len(), 2);
    assert_eq!(coordinates[1], AtomCoordinate::new("H", 0.0, 0.0, 0.74));
}

#[test]
fn unknown_and_missing_files() {
    init_logger();
    assert!(extract(&fixture("water.xyz")).is_empty());
    assert!(extract(&fixture("does_not_exist.log")).is_empty());
}

#[test]
fn extraction_is_repeatable() {
    let paths: Vec<PathBuf> = vec![
        fixture("methane.com"),
        fixture("water_opt.log"),
        fixture("water_aborted.log"),
        fixture("water.in"),
        fixture("zmatrix_first.out"),
        fixture("water.xyz"),
    ];
    let serial: Vec<(PathBuf, CoordinateList)> = extract_all(&paths, false);
    let parallel: Vec<(PathBuf, CoordinateList)> = extract_all(&paths, true);
    assert_eq!(serial, parallel);
    assert_eq!(serial, extract_all(&paths, false));
    let names: Vec<PathBuf> = parallel.iter().map(|(path, _)| path.clone()).collect();
    assert_eq!(names, paths);
}

#[test]
fn csv_report_of_a_batch() {
    let paths: Vec<PathBuf> = vec![fixture("methane.com"), fixture("water.xyz")];
    let results: Vec<(PathBuf, CoordinateList)> = extract_all(&paths, true);
    let mut config: Configuration = Configuration::default();
    config.output.format = OutputFormat::Csv;
    config.output.compact = true;
    let out: String = render(&results, &config.output).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "");
    assert!(lines[1].ends_with("methane.com, Atoms: 5, Formula: CH4"));
    assert!(lines[2].ends_with("water.xyz, No coordinates found."));
}
