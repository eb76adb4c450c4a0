mod imprint;
mod input;
mod output;
pub(crate) mod settings;

pub use imprint::write_header;
pub use input::{read_content, resolve_paths};
pub use output::{render, render_csv, render_json, render_table, FileResult};
pub use settings::{Configuration, OutputConfig, OutputFormat};
