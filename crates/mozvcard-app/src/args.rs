use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "mozvcard")]
#[command(about = "Convert mozContact JSON records to vCard 4.0", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding one contact or an array of contacts; `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Physical line width for folding (at least 20); overrides configuration
    #[arg(long)]
    pub fold_width: Option<usize>,

    /// Log filter directive, e.g. `debug` or `mozvcard_rfc=trace`; overrides configuration
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Returns the input path, or `None` for stdin.
    #[must_use]
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
