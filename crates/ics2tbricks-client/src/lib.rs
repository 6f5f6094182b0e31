//! CLI, configuration, URL fetcher and reader adapters
//!
//! This crate provides the `ics2tbricks` command-line interface on top of
//! `ics2tbricks-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod reader;

pub use cli::{Cli, Invocation, Source};
pub use config::{ClientConfig, DEFAULT_CALENDAR_URL, HttpSettings, SourceSettings};
pub use error::{ClientError, ClientResult};
pub use fetch::{calendar_resource_from_url, fetch_ics, validate_url};
pub use reader::{calendar_resource_from_file, calendar_resource_from_reader, read_ics};
