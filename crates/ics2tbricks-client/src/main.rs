//! ics2tbricks CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use ics2tbricks_core::{TracingConfig, init_tracing};

use ics2tbricks_client::cli::{Cli, Source};
use ics2tbricks_client::config::ClientConfig;
use ics2tbricks_client::error::ClientResult;
use ics2tbricks_client::{fetch, reader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(xml) => {
            println!("{}", xml);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<String> {
    let config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };

    let invocation = cli.resolve(&config);
    match invocation.source {
        Source::Url(url) => {
            fetch::resource_from_url_with(&url, &invocation.options, &config.http).await
        }
        Source::File(path) => {
            let file = tokio::fs::File::open(&path).await?;
            reader::resource_from_reader_with(file, &invocation.options).await
        }
    }
}
