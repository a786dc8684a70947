use crate::config::{Format, Settings};
use crate::error::Result;
use colored::Colorize;

pub fn show(settings: &Settings, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(settings)?),
        Format::Toml => print!("{}", toml::to_string(settings)?),
        Format::Text => print_text(settings),
    }
    Ok(())
}

fn print_text(settings: &Settings) {
    let token = if settings.is_authenticated() {
        "***".green()
    } else {
        "unset (unauthenticated)".yellow()
    };
    let log_file = match &settings.log_file {
        Some(p) => p.display().to_string().normal(),
        None => "unset".yellow(),
    };
    println!("{}: {:?}", "mode".bold(), settings.mode);
    println!("{}: {}", "github_token".bold(), token);
    println!("{}: {}", "log_file".bold(), log_file);
    println!("{}: {}", "log_level".bold(), settings.log_level);
    println!("{}: {}", "repo_path".bold(), settings.repo_path.display());
    println!(
        "{}: {}",
        "data_file_path".bold(),
        settings.data_file_path.display()
    );
}
