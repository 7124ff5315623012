//! One extraction run: obtain markup, extract, validate, write.
//!
//! A fetch failure and a page with no deals end the same way: nothing is
//! written and the process exits non-zero with a hint list. Validation
//! failures are errors; the output file is left untouched.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use circular_core::{load_selector_table, AppConfig, SelectorTable};
use circular_scraper::{
    circular_url, to_json_values, validate_deals, CircularClient, CircularScraper, SAMPLE_MARKUP,
};

use crate::output::write_json_atomic;
use crate::summary::Summary;
use crate::Cli;

pub(crate) async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let table = match &config.selectors_path {
        Some(path) => load_selector_table(path)
            .with_context(|| format!("loading selector table from {}", path.display()))?,
        None => SelectorTable::default(),
    };
    let scraper = CircularScraper::new(config.retailer.as_str(), &table)
        .context("compiling selector table")?;

    let Some(markup) = obtain_markup(cli, config).await? else {
        print_no_deals_hint(config);
        return Ok(ExitCode::FAILURE);
    };

    if !cli.no_debug_html {
        if let Some(path) = &config.debug_html_path {
            save_debug_html(path, &markup);
        }
    }

    let report = scraper.scrape_markup_today(&markup);
    if report.is_empty() {
        print_no_deals_hint(config);
        return Ok(ExitCode::FAILURE);
    }

    let values = to_json_values(&report.records).context("serializing deals")?;
    validate_deals(&values).context("deals failed schema validation; nothing written")?;

    write_json_atomic(&cli.output, &values)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!(
        "saved {} deals to {}",
        report.records.len(),
        cli.output.display()
    );

    if let Some(summary) = Summary::from_records(&report.records) {
        print!("{summary}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Markup for this run, or `None` if the fetch failed.
///
/// Local sources (`--test`, `--input`) never yield `None`; a missing input
/// file is an error.
async fn obtain_markup(cli: &Cli, config: &AppConfig) -> anyhow::Result<Option<String>> {
    if cli.test {
        tracing::info!("running against built-in sample markup");
        return Ok(Some(SAMPLE_MARKUP.to_owned()));
    }

    if let Some(path) = &cli.input {
        let markup = std::fs::read_to_string(path)
            .with_context(|| format!("reading circular markup from {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = markup.len(), "loaded circular markup");
        return Ok(Some(markup));
    }

    let store_id = cli.store_id.as_deref().unwrap_or(&config.store_id);
    let url = circular_url(&config.url_template, store_id)?;
    let client = CircularClient::new(config.request_timeout_secs, &config.user_agent)
        .context("building HTTP client")?;

    match client.fetch_markup(&url).await {
        Ok(markup) => Ok(Some(markup)),
        Err(e) => {
            tracing::error!(url = %url, error = %e, "failed to fetch circular page");
            Ok(None)
        }
    }
}

/// Writes the raw markup verbatim. Failure is logged, never fatal.
fn save_debug_html(path: &Path, markup: &str) {
    match std::fs::write(path, markup) {
        Ok(()) => tracing::info!(path = %path.display(), "debug markup saved"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not save debug markup"),
    }
}

fn print_no_deals_hint(config: &AppConfig) {
    let debug_hint = config
        .debug_html_path
        .as_ref()
        .map_or_else(String::new, |p| format!(" (check {})", p.display()));

    println!("no deals found");
    println!();
    println!("possible reasons:");
    println!("  1. website structure changed{debug_hint}");
    println!("  2. no active deals for this store");
    println!("  3. network or access issues");
    println!();
    println!("try running with --test to verify the scraper works");
}
