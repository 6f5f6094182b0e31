//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;
use ics2tbricks_core::TransformOptions;

use crate::config::ClientConfig;

/// ics2tbricks - Convert an ICS market calendar into a Tbricks calendar resource
#[derive(Debug, Parser)]
#[command(name = "ics2tbricks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ICS feed URL (http:// or https://)
    pub url: Option<String>,

    /// Country code used as the resource name
    pub country_code: Option<String>,

    /// Read the calendar from a local ICS file instead of fetching a URL
    #[arg(long, short, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Country code, for use together with --file
    #[arg(long, value_name = "CODE", conflicts_with = "country_code")]
    pub country: Option<String>,

    /// Path to configuration file
    #[arg(long, short, env = "ICS2TBRICKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

/// Where to read the calendar from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch over HTTP.
    Url(String),
    /// Read a local file.
    File(PathBuf),
}

/// A fully resolved run: CLI arguments layered over the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: Source,
    pub options: TransformOptions,
}

impl Cli {
    /// Resolves the source and transform options.
    ///
    /// Arguments win over the configuration file, which wins over the
    /// built-in defaults.
    pub fn resolve(&self, config: &ClientConfig) -> Invocation {
        let source = match (&self.file, &self.url) {
            (Some(path), _) => Source::File(path.clone()),
            (None, Some(url)) => Source::Url(url.clone()),
            (None, None) => Source::Url(config.source.url.clone()),
        };

        let mut options = config.source.transform_options();
        if let Some(code) = self.country_code.as_ref().or(self.country.as_ref()) {
            options.country_code = code.clone();
        }

        Invocation { source, options }
    }
}
