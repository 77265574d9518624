//! Display-mode command implementation.

use crate::{OutputFormat, ViewArgs, render};
use anyhow::{Context, Result};
use cuenta::{DashboardConfig, DashboardRequest, DisplayMode};
use tracing::debug;

/// Render one display mode for the tickers in `args`.
pub(crate) async fn show(mode: DisplayMode, args: &ViewArgs) -> Result<()> {
    let mut config = DashboardConfig::from_env().context("loading configuration")?;
    if let Some(rate) = args.risk_free_rate {
        config.risk_free_rate = rate;
    }
    if let Some(days) = args.days {
        config.history_days = days;
    }

    debug!(?config, "configuration loaded");

    let dashboard = cuenta::fmp_dashboard(config)?;

    let mut request = DashboardRequest::new(&args.ticker, mode).with_extra(args.with.iter().cloned());
    if let Some(compare) = &args.compare {
        request = request.with_compare(compare);
    }

    let view = dashboard
        .render(&request)
        .await
        .with_context(|| format!("rendering {} for {}", mode.title(), args.ticker))?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => render::print_view(&view),
    }
    Ok(())
}
