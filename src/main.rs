use clap::Parser;
use std::path::PathBuf;
use tester_cli::config::{Format, Mode, Settings};
use tester_cli::env_keys::ENV_TESTER_BASE_DIR;
use tester_cli::error::Result;
use tester_cli::styling::ColorPalette;
use tester_cli::{cmd, fields};

#[derive(Parser)]
#[clap(version, about)]
struct Opt {
    /// Output format
    #[clap(long, short, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,
    /// Deployment variant, selects the default repository and URL file paths
    #[clap(long, short, value_enum, global = true, default_value_t = Mode::Multi)]
    mode: Mode,
    /// Directory holding the .env file and the URL files (urls.txt, one-url.txt).
    /// Defaults to the directory of the tester's source tree
    #[clap(long, global = true, env = ENV_TESTER_BASE_DIR)]
    base_dir: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Show the resolved settings
    Show,
    /// List the scoring output fields
    Fields {
        #[clap(long, short, value_enum, default_value_t = fields::Kind::All)]
        kind: fields::Kind,
    },
    /// List the URLs of the data file
    Urls,
    /// Check newline-delimited scoring output (stdin when FILE is omitted)
    Check { file: Option<PathBuf> },
}

fn main() {
    let opt = Opt::parse();
    match run(opt) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}", ColorPalette::Red.paint(&format!("error: {e}")));
            std::process::exit(1);
        }
    }
}

/// Runs the selected command. `Ok(false)` means the command ran but reported failures.
fn run(opt: Opt) -> Result<bool> {
    let base_dir = opt
        .base_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    let settings = Settings::load(opt.mode, &base_dir);
    tester_cli::logging::init(&settings)?;
    for w in &settings.warnings {
        tracing::warn!("{w}");
        eprintln!("{}", ColorPalette::Yellow.paint(&format!("warning: {w}")));
    }
    tracing::debug!(?settings, "settings resolved");

    match opt.command {
        Command::Show => cmd::show::show(&settings, opt.format)?,
        Command::Fields { kind } => cmd::fields::list(kind, opt.format)?,
        Command::Urls => cmd::urls::list(&settings, opt.format)?,
        Command::Check { file } => return cmd::check::check(file.as_deref(), opt.format),
    };
    Ok(true)
}
