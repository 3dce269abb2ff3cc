use std::io;

use anyhow::Context;
use clap::Parser;
use iconfont_assets::{Fetcher, ReqwestClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::App;

mod cli;
mod run;

fn main() -> anyhow::Result<()> {
    // Logging setup; stdout is reserved for the icons line
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let app = App::parse();
    let endpoints = app.endpoints()?;
    let plan = app.plan(&endpoints);
    let client = ReqwestClient::with_setting(app.client_setting())?;
    let fetcher = Fetcher::new(client, endpoints);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create runtime")?;

    let report = rt.block_on(run::run(
        &fetcher,
        &plan,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    ))?;

    info!(
        icons = report.index.as_ref().map_or(0, |index| index.icons.len()),
        index_ok = report.index.is_ok(),
        asset_ok = report.asset.is_ok(),
        "run finished"
    );
    Ok(())
}
