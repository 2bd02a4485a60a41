//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized with colors and progress spinner
    #[default]
    Pretty,
    /// Plain format - bare values only, for capture in shell scripts
    Plain,
    /// JSON format - structured for scripts/APIs
    Json,
}
