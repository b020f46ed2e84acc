use clap::Parser;
use docseek::core::config::{self, CliOverrides};
use docseek::core::document;
use docseek::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docseek", about = "Search a directory of text documents from the terminal")]
struct Args {
    /// Directory to load documents from (or DOCSEEK_ROOT / general.root)
    root: Option<PathBuf>,

    /// File extension of the documents to load [default: md]
    #[arg(short, long)]
    ext: Option<String>,

    /// Log file path
    #[arg(long, default_value = "docseek.log")]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Log to a file; the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("docseek starting up");

    let overrides = CliOverrides {
        root: args.root,
        extension: args.ext,
    };
    let config = match config::load_config().and_then(|c| config::resolve(&c, overrides)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration failed: {}", e);
            eprintln!("docseek: {e}");
            return ExitCode::FAILURE;
        }
    };

    let documents = match document::load(&config.root, &config.extension) {
        Ok(documents) => documents,
        Err(e) => {
            log::error!("Load failed: {}", e);
            eprintln!("Error reading files: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(&documents, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("TUI exited with error: {}", e);
            eprintln!("Error while running program: {e}");
            ExitCode::FAILURE
        }
    }
}
