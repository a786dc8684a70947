use crate::config::Format;
use crate::error::{Error, Result};
use crate::fields::{ALL_FIELDS, SCORE_FIELDS, URL_FIELD, latency_field};
use crate::styling::{ColorPalette, ellipsize};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const URL_WIDTH: usize = 60;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LineResult {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub errors: Vec<String>,
}

impl LineResult {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize, Debug, Default)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<LineResult>,
}

impl Report {
    fn push(&mut self, result: LineResult) {
        if result.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Validates one JSON line of scoring output.
pub fn check_line(line: usize, text: &str) -> LineResult {
    let obj = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(obj)) => obj,
        Ok(_) => return failure(line, "not a JSON object".to_owned()),
        Err(e) => return failure(line, format!("invalid JSON: {e}")),
    };
    let mut errors: Vec<String> = ALL_FIELDS
        .iter()
        .filter(|f| !obj.contains_key(f.as_str()))
        .map(|f| format!("missing field {f}"))
        .collect();

    let url = match obj.get(URL_FIELD) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(format!("{URL_FIELD} is not a string"));
            None
        }
        None => None,
    };
    for score in SCORE_FIELDS {
        if let Some(e) = check_number(&obj, score, |v| (0.0..=1.0).contains(&v), "in [0, 1]") {
            errors.push(e);
        }
        let latency = latency_field(score);
        if let Some(e) = check_number(&obj, &latency, |v| v >= 0.0, ">= 0") {
            errors.push(e);
        }
    }
    LineResult { line, url, errors }
}

fn failure(line: usize, error: String) -> LineResult {
    LineResult {
        line,
        url: None,
        errors: vec![error],
    }
}

fn check_number<F>(obj: &Map<String, Value>, field: &str, valid: F, expect: &str) -> Option<String>
where
    F: Fn(f64) -> bool,
{
    match obj.get(field)? {
        Value::Number(n) => match n.as_f64() {
            Some(v) if valid(v) => None,
            _ => Some(format!("{field}={n} is not {expect}")),
        },
        other => Some(format!("{field}={other} is not a number")),
    }
}

pub fn check_reader<R: Read>(reader: R) -> Result<Report> {
    let mut report = Report::default();
    for (i, bytes) in BufReader::new(reader).split(b'\n').enumerate() {
        let bytes = bytes?;
        let result = match std::str::from_utf8(&bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => check_line(i + 1, line),
            Err(e) => failure(i + 1, format!("invalid UTF-8: {e}")),
        };
        tracing::debug!(line = result.line, errors = result.errors.len(), "checked");
        report.push(result);
    }
    Ok(report)
}

/// Checks `file`, or stdin when absent. Returns whether every line passed.
pub fn check(file: Option<&Path>, format: Format) -> Result<bool> {
    let report = match file {
        Some(path) => {
            let f = std::fs::File::open(path).map_err(|source| Error::Read {
                path: path.to_owned(),
                source,
            })?;
            check_reader(f)?
        }
        None => check_reader(std::io::stdin().lock())?,
    };
    tracing::info!(passed = report.passed, failed = report.failed, "check finished");
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Toml => print!("{}", toml::to_string(&report)?),
        Format::Text => print_text(&report),
    }
    Ok(report.is_success())
}

fn print_text(report: &Report) {
    for r in &report.results {
        let url = ellipsize(r.url.as_deref().unwrap_or("-"), URL_WIDTH);
        if r.passed() {
            println!("{} {:>4} {}", ColorPalette::Green.paint("PASS"), r.line, url);
        } else {
            println!("{} {:>4} {}", ColorPalette::Red.paint("FAIL"), r.line, url);
            for e in &r.errors {
                println!("       {}", ColorPalette::Yellow.paint(e));
            }
        }
    }
    let summary = format!(
        "{}/{} lines passed",
        report.passed,
        report.passed + report.failed
    );
    println!("{}", ColorPalette::Bold.paint(&summary));
}
