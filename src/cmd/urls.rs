use crate::config::{Format, Settings};
use crate::error::{Error, Result};
use std::path::Path;

/// Reads the URL list, one URL per line. Blank lines are skipped.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(parse_urls(&data))
}

fn parse_urls(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn list(settings: &Settings, format: Format) -> Result<()> {
    let urls = read_urls(&settings.data_file_path)?;
    tracing::info!(
        path = %settings.data_file_path.display(),
        count = urls.len(),
        "read url list"
    );
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&urls)?),
        Format::Toml => {
            #[derive(serde::Serialize)]
            struct Table<'a> {
                urls: &'a [String],
            }
            print!("{}", toml::to_string(&Table { urls: &urls })?)
        }
        Format::Text => {
            for url in &urls {
                println!("{url}")
            }
            println!("# count: {}", urls.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines_and_trims() {
        let urls = parse_urls("https://github.com/a/b\n\n  https://www.npmjs.com/package/c  \r\n");
        assert_eq!(
            urls,
            vec!["https://github.com/a/b", "https://www.npmjs.com/package/c"]
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_urls(Path::new("/nonexistent/urls.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/urls.txt"));
    }
}
