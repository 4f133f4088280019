//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::AppContainer;
use crate::app::GrabRequest;
use crate::cli::args::{GrabArgs, InfoArgs, InfoFormat, LinksArgs};
use crate::domain::model::Metadata;

/// Execute the grab command
pub async fn grab(container: &dyn AppContainer, args: GrabArgs) -> Result<()> {
    info!("Starting grab operation");

    let request = GrabRequest {
        source: args.url,
        skip_codecs: args.skip_codecs,
        dry_run: args.dry_run,
    };

    let report = container
        .grab_interactor()
        .execute(request)
        .await
        .context("Grab failed")?;

    if report.executed {
        println!("Saved: {}", report.output_path);
    }

    info!("Grab operation completed successfully");
    Ok(())
}

/// Execute the info command
pub async fn info(container: &dyn AppContainer, args: InfoArgs) -> Result<()> {
    info!("Starting info operation");

    let metadata = container
        .metadata_interactor()
        .resolve(&args.url)
        .await
        .context("Failed to probe source")?;

    let rendered = match args.output {
        InfoFormat::Json => serde_json::to_string_pretty(&metadata)
            .context("Failed to serialize metadata to JSON")?,
        InfoFormat::Yaml => {
            serde_yaml::to_string(&metadata).context("Failed to serialize metadata to YAML")?
        }
        InfoFormat::Text => format_metadata(&metadata),
    };
    println!("{}", rendered);

    Ok(())
}

/// Execute the links command
pub async fn links(container: &dyn AppContainer, args: LinksArgs) -> Result<()> {
    info!("Starting links operation");

    let links = container
        .links_interactor()
        .resolve_links(&args.url, &args.format)
        .await
        .context("Failed to resolve links")?;

    for link in links {
        println!("{}", link);
    }

    Ok(())
}

/// Human-readable metadata
fn format_metadata(metadata: &Metadata) -> String {
    let mut output = String::new();

    output.push_str("Title: ");
    output.push_str(&metadata.title);
    output.push_str("\nFull title: ");
    output.push_str(&metadata.full_title);
    output.push_str("\nDuration: ");
    output.push_str(&metadata.duration);
    output.push_str(&format!(
        "\nLive: {} ({})\n",
        if metadata.is_live { "yes" } else { "no" },
        metadata.live_status
    ));

    if !metadata.formats_table.is_empty() {
        output.push_str("\nFormats:\n");
        output.push_str(&metadata.formats_table);
    }

    output
}
