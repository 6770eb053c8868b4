use std::fmt::{self, Write as _};
use std::path::Path;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use region_view::model::{ActivityWindow, RegionSnapshot};
use region_view::tooltip::EMPTY_PLACEHOLDER;
use region_view::{ApiEndpoints, LoadError, RegionView, ViewConfig};
use serde::de::DeserializeOwned;

use crate::cli::{CliArgs, OutputFormat};

/// Render one region without a browser.
pub async fn run(args: &CliArgs) -> Result<()> {
    let view = RegionView::new(
        args.region.as_str(),
        ApiEndpoints::new(args.api.as_str()),
        ViewConfig::default(),
    );

    let snapshot = match &args.input {
        Some(path) => read_snapshot(path)?,
        None => {
            let client = reqwest::Client::new();
            let url = view.region_url();
            log::info!("fetching {url}");
            fetch_json::<RegionSnapshot>(&client, &url)
                .await
                .map_err(|error| {
                    eyre!("Failed to load data for region \"{}\": {error}", view.region())
                })?
        }
    };

    match args.output() {
        OutputFormat::Text => print!("{}", render_summary(&snapshot)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Html => print!("{}", view.document(view.render(&Ok(snapshot)))),
    }

    Ok(())
}

fn read_snapshot(path: &Path) -> Result<RegionSnapshot> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("parsing {}", path.display()))
}

/// GET `url` and decode a JSON body, mapping failures onto [`LoadError`].
pub async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> std::result::Result<T, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|error| LoadError::Network(error.to_string()))?;

    LoadError::check_status(response.status().as_u16())?;

    response
        .json::<T>()
        .await
        .map_err(|error| LoadError::Decode(error.to_string()))
}

fn render_summary(snapshot: &RegionSnapshot) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let name = if snapshot.name.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        snapshot.name.as_str()
    };

    writeln!(out, "\nRegion {name}")?;
    writeln!(out, "=================")?;
    writeln!(out, "Spotter spots: {}", snapshot.num_spotter_spots)?;
    writeln!(
        out,
        "Spotters ({}): {}",
        snapshot.spotters.len(),
        join_or_placeholder(&snapshot.spotters)
    )?;

    writeln!(out, "\nBand Activities:")?;
    for activity in &snapshot.band_activities {
        let windows = ActivityWindow::ALL
            .iter()
            .map(|window| {
                format!(
                    "{}: {}",
                    window.label(),
                    join_or_placeholder(activity.callsigns(*window))
                )
            })
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "- {}: {windows}", activity.band)?;
    }

    Ok(out)
}

fn join_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}
