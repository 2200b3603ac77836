use infopack::cli::{CliArgs, OutputFormatter};
use infopack::config::InfopackConfig;
use infopack::progress::LoggingHandler;
use infopack::util::logging::{init_logging, parse_level, LoggingConfig};
use infopack::{Orchestrator, NAME, VERSION};

use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{debug, error, Level};

fn main() {
    let args = CliArgs::parse();

    let config = match InfopackConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    init_logging_from_args(&args, &config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config.to_display_map());

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        process::exit(1);
    }

    process::exit(handle_run(&args, &config));
}

fn init_logging_from_args(args: &CliArgs, config: &InfopackConfig) {
    let mut logging = LoggingConfig::from(config);
    if let Some(level_str) = &args.log_level {
        logging.level = parse_level(level_str);
    } else if args.verbose {
        logging.level = Level::DEBUG;
    } else if args.quiet {
        logging.level = Level::ERROR;
    }

    init_logging(logging);
}

fn handle_run(args: &CliArgs, config: &InfopackConfig) -> i32 {
    let orchestrator = Orchestrator::system(config.pipeline.clone())
        .with_progress_handler(Arc::new(LoggingHandler));

    let report = match orchestrator.run(&args.source, &args.target) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    if args.quiet {
        return 0;
    }

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format(&report) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format report: {}", e);
            1
        }
    }
}
