use anyhow::{bail, Result};
use clap::{crate_version, Arg, ArgMatches, Command};
use env_logger::Env;
use log::{debug, info};
use qcgeom::extract_all;
use qcgeom::io::{render, resolve_paths, write_header, Configuration, OutputFormat};
use qcgeom::molecule::CoordinateList;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const AFTER_HELP: &str = "Supported file types:
  Gaussian: .com (input), .log (output)
  MOLPRO:   .in (input), .out (output)

Examples:
  qcgeom molecule.com
  qcgeom calculation.log --format csv
  qcgeom molpro_input.in --compact
  qcgeom -d *.com *.log *.in *.out";

fn cli() -> Command<'static> {
    Command::new("qcgeom")
        .version(crate_version!())
        .about("Extract molecular coordinates from quantum chemistry files (Gaussian .com/.log, MOLPRO .in/.out)")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("files")
                .help("Quantum chemistry file(s) to process")
                .required(true)
                .multiple_values(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug output (printed to stderr)"),
        )
        .arg(
            Arg::new("compact")
                .short('c')
                .long("compact")
                .help("Show only the summary line of each file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .takes_value(true)
                .possible_values(["table", "csv", "json"])
                .help("Output format (default: table)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .help("Path of the configuration file (default: ./qcgeom.toml)"),
        )
}

fn init_logging(debug: bool) {
    let level: &str = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Settings file with the command line flags on top.
fn load_configuration(matches: &ArgMatches) -> Result<Configuration> {
    let mut config: Configuration = match matches.value_of("config") {
        Some(path) => Configuration::load(Path::new(path))?,
        None => Configuration::from_working_directory()?,
    };
    if let Some(format) = matches.value_of("format") {
        config.output.format = OutputFormat::from_str(format)?;
    }
    if matches.is_present("compact") {
        config.output.compact = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let matches: ArgMatches = cli().get_matches();
    init_logging(matches.is_present("debug"));
    write_header();

    let config: Configuration = load_configuration(&matches)?;
    let arguments: Vec<&str> = matches.values_of("files").map_or_else(Vec::new, |files| files.collect());
    let paths: Vec<PathBuf> = resolve_paths(&arguments);
    if paths.is_empty() {
        bail!("No valid files found matching input: {}", arguments.join(", "));
    }
    if paths.len() > 1 {
        info!("Processing {} quantum chemistry files", paths.len());
    }
    for path in paths.iter() {
        debug!("Queued: {}", path.display());
    }

    let results: Vec<(PathBuf, CoordinateList)> = extract_all(&paths, config.parallel);
    let out: String = render(&results, &config.output)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(out.as_bytes())?;
    handle.flush()?;
    Ok(())
}
