use std::error::Error;
use std::io::{self, Write};

use iconfont_assets::{Fetcher, HttpClient, IconIndexResponse, TransportError};
use tracing::{error, info};

/// What one program run fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub version: String,
    pub asset_url: String,
}

/// Outcome of both operations of a run.
#[derive(Debug)]
pub struct RunReport {
    pub index: Result<IconIndexResponse, TransportError>,
    pub asset: Result<(), TransportError>,
}

/// Look up the index, print its icons, then download the asset.
///
/// The download is attempted whatever the lookup's outcome. Operation errors
/// are written to `err` and kept in the report; only failures to write
/// to `out` or `err` are returned.
pub async fn run<C, O, E>(
    fetcher: &Fetcher<C>,
    plan: &Plan,
    out: &mut O,
    err: &mut E,
) -> io::Result<RunReport>
where
    C: HttpClient,
    O: Write,
    E: Write,
{
    let index = fetcher.fetch_index(&plan.version).await;
    match &index {
        Ok(response) => {
            info!(version = %plan.version, icons = response.icons.len(), "index fetched");
            writeln!(out, "{}", response.icons)?;
        }
        Err(e) => report(err, "index lookup", e)?,
    }

    let asset = fetcher.download_asset(&plan.asset_url).await;
    match &asset {
        Ok(()) => info!(url = %plan.asset_url, "asset downloaded"),
        Err(e) => report(err, "asset download", e)?,
    }

    Ok(RunReport { index, asset })
}

fn report(w: &mut impl Write, operation: &str, e: &TransportError) -> io::Result<()> {
    error!(url = e.url(), phase = %e.phase(), "{operation} failed: {e}");

    writeln!(w, "{operation} failed: {e}")?;
    let mut source = e.source();
    while let Some(cause) = source {
        writeln!(w, "    caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}
