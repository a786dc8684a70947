//! Configuration and output conventions shared by the scoring tester.
//!
//! [`config::Settings`] is resolved once at startup from the environment (and an
//! optional `.env` file); [`fields`] and [`styling`] hold the static tables the
//! tester uses to read and print scoring output.

pub mod cmd;
pub mod config;
pub mod env_keys;
pub mod error;
pub mod fields;
pub mod logging;
pub mod styling;
