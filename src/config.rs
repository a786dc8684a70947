use crate::env_keys::{ENV_FILE_NAME, ENV_GITHUB_TOKEN, ENV_LOG_FILE, ENV_LOG_LEVEL};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_LEVEL: i64 = 2;

const MULTI_URL_FILE: &str = "urls.txt";
const SINGLE_URL_FILE: &str = "one-url.txt";
const SINGLE_REPO_PATH: &str = "backend/cli";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Toml,
}

/// Deployment variant. Both variants resolve the same settings and differ
/// only in their default paths.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Batch mode over a list of URLs.
    #[default]
    Multi,
    /// A single URL.
    Single,
}

impl Mode {
    pub fn repo_path(&self, base_dir: &Path) -> PathBuf {
        match self {
            Self::Multi => base_dir.join("..").join("cli"),
            Self::Single => PathBuf::from(SINGLE_REPO_PATH),
        }
    }

    pub fn data_file_path(&self, base_dir: &Path) -> PathBuf {
        match self {
            Self::Multi => base_dir.join(MULTI_URL_FILE),
            Self::Single => base_dir.join(SINGLE_URL_FILE),
        }
    }
}

/// Settings resolved once at startup and handed to the commands that need them.
#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    #[serde(serialize_with = "redact", skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub log_level: i64,
    pub repo_path: PathBuf,
    pub data_file_path: PathBuf,
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("mode", &self.mode)
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("log_file", &self.log_file)
            .field("log_level", &self.log_level)
            .field("repo_path", &self.repo_path)
            .field("data_file_path", &self.data_file_path)
            .finish()
    }
}

fn redact<S: Serializer>(token: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    match token {
        Some(_) => s.serialize_some("***"),
        None => s.serialize_none(),
    }
}

impl Settings {
    /// Loads `<base_dir>/.env` into the process environment, if present, and
    /// resolves the settings from the environment.
    pub fn load(mode: Mode, base_dir: &Path) -> Self {
        let env_file = base_dir.join(ENV_FILE_NAME);
        let env_file_warning = match dotenvy::from_path(&env_file) {
            Ok(()) => None,
            Err(e) if e.not_found() => None,
            Err(e) => Some(format!("ignoring {}: {}", env_file.display(), e)),
        };
        let mut settings = Self::from_lookup(mode, base_dir, |key| std::env::var(key).ok());
        if let Some(w) = env_file_warning {
            settings.warnings.insert(0, w);
        }
        settings
    }

    /// Resolves the settings from `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(mode: Mode, base_dir: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let log_level = match lookup(ENV_LOG_LEVEL) {
            None => DEFAULT_LOG_LEVEL,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warnings.push(format!(
                    "{ENV_LOG_LEVEL}={raw:?} is not an integer, using {DEFAULT_LOG_LEVEL}"
                ));
                DEFAULT_LOG_LEVEL
            }),
        };
        Self {
            mode,
            github_token: lookup(ENV_GITHUB_TOKEN).filter(|t| !t.is_empty()),
            log_file: lookup(ENV_LOG_FILE)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            log_level,
            repo_path: mode.repo_path(base_dir),
            data_file_path: mode.data_file_path(base_dir),
            warnings,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.github_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(mode: Mode, vars: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(mode, Path::new("/opt/tester"), |k| env.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = resolve(Mode::Multi, &[]);
        assert_eq!(s.log_level, 2);
        assert_eq!(s.github_token, None);
        assert_eq!(s.log_file, None);
        assert!(!s.is_authenticated());
        assert!(s.warnings.is_empty());
    }

    #[test]
    fn reads_token_and_level() {
        let s = resolve(
            Mode::Multi,
            &[("LOG_LEVEL", "3"), ("GITHUB_TOKEN", "abc123")],
        );
        assert_eq!(s.log_level, 3);
        assert_eq!(s.github_token.as_deref(), Some("abc123"));
        assert_eq!(s.log_file, None);
    }

    #[test]
    fn empty_token_is_unset() {
        let s = resolve(Mode::Multi, &[("GITHUB_TOKEN", "")]);
        assert_eq!(s.github_token, None);
    }

    #[test]
    fn log_file_is_a_path() {
        let s = resolve(Mode::Multi, &[("LOG_FILE", "logs/tester.log")]);
        assert_eq!(s.log_file, Some(PathBuf::from("logs/tester.log")));
    }

    #[test]
    fn unparseable_level_falls_back_with_warning() {
        let s = resolve(Mode::Multi, &[("LOG_LEVEL", "verbose")]);
        assert_eq!(s.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(s.warnings.len(), 1);
        assert!(s.warnings[0].contains("verbose"));
    }

    #[test]
    fn level_tolerates_whitespace_and_sign() {
        assert_eq!(resolve(Mode::Multi, &[("LOG_LEVEL", " 1 ")]).log_level, 1);
        assert_eq!(resolve(Mode::Multi, &[("LOG_LEVEL", "-1")]).log_level, -1);
    }

    #[test]
    fn paths_follow_mode() {
        let multi = resolve(Mode::Multi, &[]);
        assert_eq!(multi.repo_path, PathBuf::from("/opt/tester/../cli"));
        assert_eq!(multi.data_file_path, PathBuf::from("/opt/tester/urls.txt"));

        let single = resolve(Mode::Single, &[]);
        assert_eq!(single.repo_path, PathBuf::from("backend/cli"));
        assert_eq!(single.data_file_path, PathBuf::from("/opt/tester/one-url.txt"));
    }

    #[test]
    fn resolution_is_repeatable() {
        let vars = [("LOG_LEVEL", "1"), ("LOG_FILE", "a.log")];
        assert_eq!(resolve(Mode::Single, &vars), resolve(Mode::Single, &vars));
    }

    #[test]
    fn token_is_redacted() {
        let s = resolve(Mode::Multi, &[("GITHUB_TOKEN", "abc123")]);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"github_token\":\"***\""));
        assert!(!json.contains("abc123"));
        assert!(!format!("{s:?}").contains("abc123"));
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(Mode::Multi, dir.path());
        assert!(s.warnings.iter().all(|w| !w.contains(".env")));
        assert_eq!(s.data_file_path, dir.path().join("urls.txt"));
    }

    #[test]
    fn env_file_is_loaded_into_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "TESTER_CLI_CONFIG_TEST_MARKER=loaded\n",
        )
        .unwrap();
        Settings::load(Mode::Multi, dir.path());
        assert_eq!(
            std::env::var("TESTER_CLI_CONFIG_TEST_MARKER").as_deref(),
            Ok("loaded")
        );
    }
}
