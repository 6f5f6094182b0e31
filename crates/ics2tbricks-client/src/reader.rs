//! Reading ICS data from files and other byte sources.

use std::path::Path;

use ics2tbricks_core::{TransformOptions, transform_with};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::error::ClientResult;

/// Reads all of `reader` as UTF-8 text.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Fails on IO errors.
pub async fn read_ics<R>(mut reader: R) -> ClientResult<String>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    debug!(bytes = bytes.len(), "Read calendar data");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads ICS data from `reader` and converts it into a calendar resource.
///
/// Produces the same document as
/// [`calendar_resource_from_ics`](ics2tbricks_core::calendar_resource_from_ics)
/// on the same text.
pub async fn calendar_resource_from_reader<R>(reader: R, country_code: &str) -> ClientResult<String>
where
    R: AsyncRead + Unpin,
{
    resource_from_reader_with(reader, &TransformOptions::new(country_code)).await
}

/// Reads ICS data from `reader` and converts it with explicit options.
pub async fn resource_from_reader_with<R>(reader: R, options: &TransformOptions) -> ClientResult<String>
where
    R: AsyncRead + Unpin,
{
    let ics = read_ics(reader).await?;
    Ok(transform_with(&ics, options)?)
}

/// Reads an ICS file and converts it into a calendar resource.
pub async fn calendar_resource_from_file(
    path: impl AsRef<Path>,
    country_code: &str,
) -> ClientResult<String> {
    let file = tokio::fs::File::open(path.as_ref()).await?;
    calendar_resource_from_reader(file, country_code).await
}
