use std::path::PathBuf;

use clap::Parser;

/// Fill document forms from the terminal
#[derive(Parser, Debug)]
#[command(name = "formfill", version, about)]
pub struct Cli {
    /// Form template file (JSON)
    pub template: PathBuf,

    /// Backend server base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Form type sent with suggestion requests (overrides the template)
    #[arg(long, value_name = "TYPE")]
    pub form_type: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory generated documents are written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Name sent with the docx export request
    #[arg(long, value_name = "NAME")]
    pub document_name: Option<String>,
}
