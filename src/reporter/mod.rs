mod json;
mod text;

use crate::FileReport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            verbose: false,
        }
    }

    /// Include warnings in the per-file output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Render all reports, in the order given
    pub fn render(&self, reports: &[FileReport]) -> String {
        match self.format {
            OutputFormat::Text => text::format(reports, self.verbose),
            OutputFormat::Json => json::format(reports, self.verbose),
        }
    }

    pub fn report(&self, reports: &[FileReport]) {
        println!("{}", self.render(reports));
    }
}
