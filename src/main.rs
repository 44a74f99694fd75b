use clap::{Parser, Subcommand};
use mediakit::toc::TocOutcome;
use mediakit::{config, organize, output, slideshow, toc};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mediakit")]
#[command(about = "Housekeeping tools for media folders")]
#[command(long_about = "\
Housekeeping tools for media folders

  slideshow   Build diashow.html/.css/.js from the images in one or more folders
  toc         Build an index page linking every HTML document in a folder
  organize    Count the files below a folder by extension

Settings are read from mediakit.toml when present; flags override them.
Run 'mediakit gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an HTML slideshow from image folders
    Slideshow {
        /// Image directory (repeatable, replaces the configured list)
        #[arg(long = "dir")]
        dirs: Vec<PathBuf>,
        /// Page title
        #[arg(long)]
        title: Option<String>,
        /// Directory for the generated files
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate a table of contents for HTML documents
    Toc {
        /// Directory to index
        #[arg(short = 'd', long)]
        directory: Option<PathBuf>,
        /// Index page file name
        #[arg(short, long)]
        output: Option<String>,
        /// Stylesheet file name
        #[arg(short = 'c', long = "css")]
        stylesheet: Option<String>,
    },
    /// List file types below a directory
    Organize {
        /// Directory to scan
        #[arg(long, default_value = ".")]
        source: PathBuf,
        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock mediakit.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config_path = cli.config;

    match cli.command {
        Command::Slideshow {
            dirs,
            title,
            output: out_dir,
        } => {
            let mut settings = config::load_config(&config_path)?;
            if !dirs.is_empty() {
                settings.slideshow.directories = dirs;
            }
            if let Some(title) = title {
                settings.slideshow.title = title;
            }
            if let Some(out_dir) = out_dir {
                settings.slideshow.output_dir = out_dir;
            }
            settings.validate()?;

            let outcome = slideshow::run(&settings.slideshow, &settings.page)?;
            output::print_slideshow_outcome(&outcome);
        }
        Command::Toc {
            directory,
            output: index_name,
            stylesheet,
        } => {
            let mut settings = config::load_config(&config_path)?;
            if let Some(directory) = directory {
                settings.toc.directory = directory;
            }
            if let Some(index_name) = index_name {
                settings.toc.output = index_name;
            }
            if let Some(stylesheet) = stylesheet {
                settings.toc.stylesheet = stylesheet;
            }
            settings.validate()?;

            let outcome = toc::generate(&settings.toc)?;
            output::print_toc_outcome(&outcome);
            if outcome == TocOutcome::NoDocuments {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Organize { source, json } => {
            let files = organize::scan_files(&source)?;
            if json {
                println!("{}", output::format_file_types_json(&files)?);
            } else {
                output::print_file_types(&files);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr; stdout carries command output only.
fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
