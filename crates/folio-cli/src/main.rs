//! folio CLI: open, check and print itinerary documents

use clap::{Parser, Subcommand};
use folio_core::{
    check_document, config_path, log_path, render_printable, CheckReport, Document, PageState,
    ViewerConfig, PRINT_WIDTH,
};
use std::path::{Path, PathBuf};

const DEFAULT_DOCUMENT: &str = "itinerary.json";

/// Terminal viewer for tabbed itinerary documents
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a document in the TUI (default when no command specified)
    View {
        /// Path to the document
        #[arg(default_value = DEFAULT_DOCUMENT)]
        path: PathBuf,

        /// Theme override (mocha, latte, high-contrast)
        #[arg(long)]
        theme: Option<String>,

        /// Force ASCII icons and borders
        #[arg(long)]
        ascii: bool,

        /// Show timeline entries without the entrance animation
        #[arg(long)]
        no_anim: bool,
    },

    /// Create a starter document and its .folio/ config
    Init {
        /// Where to write the document
        #[arg(default_value = DEFAULT_DOCUMENT)]
        path: PathBuf,
    },

    /// Lint a document for dead tab targets and unreachable panels
    Check {
        /// Path to the document
        #[arg(default_value = DEFAULT_DOCUMENT)]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the printable text copy
    Print {
        /// Path to the document
        #[arg(default_value = DEFAULT_DOCUMENT)]
        path: PathBuf,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // Default: open the TUI on the default document
            cmd_view(Path::new(DEFAULT_DOCUMENT), None, false, false);
        }
        Some(Commands::View {
            path,
            theme,
            ascii,
            no_anim,
        }) => {
            cmd_view(&path, theme, ascii, no_anim);
        }
        Some(Commands::Init { path }) => {
            cmd_init(&path);
        }
        Some(Commands::Check { path, json }) => {
            cmd_check(&path, json);
        }
        Some(Commands::Print { path, output }) => {
            cmd_print(&path, output.as_deref());
        }
    }
}

fn cmd_view(path: &Path, theme: Option<String>, ascii: bool, no_anim: bool) {
    let base = document_dir(path);
    let mut config = match ViewerConfig::load_or_default(&config_path(&base)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if ascii {
        config.ascii = true;
    }
    if no_anim {
        config.animate = false;
    }

    // The TUI owns the terminal, so logs go to a file under .folio/
    init_file_logging(&base);
    tracing::info!(document = %path.display(), "starting viewer");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(folio_tui::run_tui(path, config)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_init(path: &Path) {
    let base = document_dir(path);

    let config_file = config_path(&base);
    if config_file.exists() {
        println!("Config already exists at {}", config_file.display());
    } else {
        match ViewerConfig::default().save(&config_file) {
            Ok(()) => println!("Created {}", config_file.display()),
            Err(e) => {
                eprintln!("Failed to write config: {e}");
                std::process::exit(1);
            }
        }
    }

    if path.exists() {
        println!("Document already exists at {}", path.display());
    } else {
        match Document::sample().save(path) {
            Ok(()) => println!("Created {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write document: {e}");
                std::process::exit(1);
            }
        }
    }

    println!("\nRun `folio view {}` to open it", path.display());
}

fn cmd_check(path: &Path, json: bool) {
    init_stderr_logging();
    let document = load_document(path);
    let report = check_document(&document);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("failed to serialize report")
        );
    } else if report.is_clean() {
        println!("{}: no findings", path.display());
    } else {
        println!("{}:", path.display());
        for finding in &report.findings {
            println!("  {}: {}", finding.severity, finding.message);
        }
    }

    let code = check_exit_code(&report);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Exit code for a check run. Errors fail the command; warnings and info
/// findings do not.
fn check_exit_code(report: &CheckReport) -> i32 {
    i32::from(report.has_errors())
}

fn cmd_print(path: &Path, output: Option<&Path>) {
    init_stderr_logging();
    let document = load_document(path);

    let mut page = PageState::new(document, PRINT_WIDTH, 24);
    page.prepare_print();
    let text = render_printable(&page);

    match output {
        Some(out) => match std::fs::write(out, &text) {
            Ok(()) => println!("Wrote {}", out.display()),
            Err(e) => {
                eprintln!("Failed to write {}: {e}", out.display());
                std::process::exit(1);
            }
        },
        None => print!("{text}"),
    }
}

fn load_document(path: &Path) -> Document {
    match Document::load(path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Directory the document lives in; config and logs sit next to it.
fn document_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn init_file_logging(base: &Path) {
    let log_file = log_path(base);
    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_report_exits_zero() {
        let report = check_document(&Document::sample());
        assert_eq!(check_exit_code(&report), 0);
    }

    #[test]
    fn test_error_finding_exits_nonzero() {
        let mut document = Document::sample();
        document.buttons[0].target = "nowhere".into();
        let report = check_document(&document);
        assert!(report.has_errors());
        assert_eq!(check_exit_code(&report), 1);
    }

    #[test]
    fn test_warnings_alone_do_not_fail_the_check() {
        // Two buttons sharing a target is a warning, not an error.
        let mut document = Document::sample();
        document.buttons[1].target = "day1".into();
        let report = check_document(&document);
        assert!(!report.is_clean());
        assert_eq!(check_exit_code(&report), 0);
    }
}
