use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Collects info directories into a target tree, builds their Go sources and
/// catalogues them
#[derive(Parser, Debug)]
#[command(
    name = "infopack",
    about = "Collects info directories into a target tree, builds their Go sources and catalogues them",
    version,
    long_about = "infopack scans SOURCE for immediate subdirectories whose name contains \"info\" \
                  (any case), copies each into TARGET with the first \"_info\" removed from its \
                  name, runs `go build` on the first .go file inside each copy, and writes \
                  TARGET/metadata.json listing the copied directories.\n\n\
                  Both paths are resolved against the current directory. An existing \
                  TARGET/<name> directory is deleted before it is replaced.\n\n\
                  Examples:\n  \
                  infopack data out\n  \
                  infopack --format json data out"
)]
pub struct CliArgs {
    #[arg(value_name = "SOURCE", help = "Directory to scan for info directories")]
    pub source: PathBuf,

    #[arg(value_name = "TARGET", help = "Directory to copy info directories into")]
    pub target: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Format of the run report printed to stdout"
    )]
    pub format: OutputFormatArg,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
