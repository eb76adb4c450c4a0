use crate::formula::formula;
use crate::io::settings::{OutputConfig, OutputFormat};
use crate::molecule::{AtomCoordinate, CoordinateList};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Summary of one extracted file as it is written in the JSON output.
#[derive(Serialize, Debug, Clone)]
pub struct FileResult {
    pub file: String,
    pub n_atoms: usize,
    pub formula: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoms: Option<CoordinateList>,
}

impl FileResult {
    pub fn new(path: &Path, coordinates: &[AtomCoordinate], compact: bool) -> Self {
        FileResult {
            file: path.display().to_string(),
            n_atoms: coordinates.len(),
            formula: formula(coordinates),
            atoms: if compact { None } else { Some(coordinates.to_vec()) },
        }
    }
}

/// Human readable block of a single file.
pub fn render_table(path: &Path, coordinates: &[AtomCoordinate], config: &OutputConfig) -> String {
    let mut out: String = String::new();
    if coordinates.is_empty() {
        writeln!(out, "Coordinates from {} | No coordinates found.", path.display()).ok();
        return out;
    }
    writeln!(
        out,
        "Coordinates from {} | Atoms: {} | Formula: {}",
        path.display(),
        coordinates.len(),
        formula(coordinates)
    )
    .ok();
    if !config.compact {
        out.push('\n');
        let p: usize = config.precision;
        for atom in coordinates.iter() {
            writeln!(
                out,
                "{:<8} {:<15.*} {:<15.*} {:<15.*}",
                atom.element, p, atom.x, p, atom.y, p, atom.z
            )
            .ok();
        }
        out.push('\n');
    }
    out
}

/// CSV block of a single file. The summary is written as a comment line.
pub fn render_csv(path: &Path, coordinates: &[AtomCoordinate], config: &OutputConfig) -> String {
    let mut out: String = String::new();
    if coordinates.is_empty() {
        writeln!(out, "# File: {}, No coordinates found.", path.display()).ok();
        return out;
    }
    writeln!(
        out,
        "# File: {}, Atoms: {}, Formula: {}",
        path.display(),
        coordinates.len(),
        formula(coordinates)
    )
    .ok();
    if !config.compact {
        out.push_str("Element,X,Y,Z\n");
        let p: usize = config.precision;
        for atom in coordinates.iter() {
            writeln!(out, "{},{:.*},{:.*},{:.*}", atom.element, p, atom.x, p, atom.y, p, atom.z).ok();
        }
    }
    out
}

/// One JSON array for all files of the run.
pub fn render_json(results: &[(PathBuf, CoordinateList)], config: &OutputConfig) -> Result<String> {
    let records: Vec<FileResult> = results
        .iter()
        .map(|(path, coordinates)| FileResult::new(path, coordinates, config.compact))
        .collect();
    let mut out: String = serde_json::to_string_pretty(&records)?;
    out.push('\n');
    Ok(out)
}

/// Renders the results of a whole run in the configured format.
pub fn render(results: &[(PathBuf, CoordinateList)], config: &OutputConfig) -> Result<String> {
    if config.format == OutputFormat::Json {
        return render_json(results, config);
    }
    let multiple_files: bool = results.len() > 1;
    let mut out: String = String::from("\n");
    for (i, (path, coordinates)) in results.iter().enumerate() {
        match config.format {
            OutputFormat::Csv => out.push_str(&render_csv(path, coordinates, config)),
            _ => {
                out.push_str(&render_table(path, coordinates, config));
                if multiple_files && i < results.len() - 1 {
                    out.push_str("---\n");
                    if !config.compact {
                        out.push('\n');
                    }
                }
            }
        }
    }
    Ok(out)
}
