//! Field names of the JSON objects emitted by the scoring engine.

use once_cell::sync::Lazy;
use serde::Serialize;

pub const LATENCY_SUFFIX: &str = "_Latency";

pub const URL_FIELD: &str = "URL";

pub const FIELDS: &[&str] = &[URL_FIELD];

pub const SCORE_FIELDS: &[&str] = &[
    "NetScore",
    "RampUp",
    "Correctness",
    "BusFactor",
    "ResponsiveMaintainer",
    "License",
    "PinnedDependencies",
    "ReviewedCode",
];

pub static LATENCY_FIELDS: Lazy<Vec<String>> =
    Lazy::new(|| SCORE_FIELDS.iter().map(|s| latency_field(s)).collect());

pub static ALL_FIELDS: Lazy<Vec<String>> = Lazy::new(|| {
    FIELDS
        .iter()
        .chain(SCORE_FIELDS)
        .map(|s| s.to_string())
        .chain(LATENCY_FIELDS.iter().cloned())
        .collect()
});

pub fn latency_field(score_field: &str) -> String {
    format!("{score_field}{LATENCY_SUFFIX}")
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    All,
    Base,
    Score,
    Latency,
}

/// Borrowed view over the static field tables.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct FieldCatalog {
    pub base: &'static [&'static str],
    pub score: &'static [&'static str],
    pub latency: &'static [String],
    pub all: &'static [String],
}

impl FieldCatalog {
    pub fn get() -> Self {
        Self {
            base: FIELDS,
            score: SCORE_FIELDS,
            latency: LATENCY_FIELDS.as_slice(),
            all: ALL_FIELDS.as_slice(),
        }
    }

    pub fn select(&self, kind: Kind) -> Vec<&'static str> {
        match kind {
            Kind::All => self.all.iter().map(String::as_str).collect(),
            Kind::Base => self.base.to_vec(),
            Kind::Score => self.score.to_vec(),
            Kind::Latency => self.latency.iter().map(String::as_str).collect(),
        }
    }
}
