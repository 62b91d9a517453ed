//! `gallery catalog list|show|check` – inspect the static catalog.

use anyhow::{Context, Result};
use gallery_core::catalog::Catalog;
use gallery_core::config::GalleryConfig;
use gallery_core::transform::{presets, UrlTransformer};

use crate::cli::CatalogAction;

pub async fn run_catalog(cfg: &GalleryConfig, source: &str, action: CatalogAction) -> Result<()> {
    let src = source.to_string();
    let catalog = tokio::task::spawn_blocking(move || Catalog::load(&src))
        .await
        .context("catalog loader panicked")?
        .with_context(|| format!("load catalog from {source}"))?;
    let transformer = UrlTransformer::new(cfg.delivery_host.as_str());

    match action {
        CatalogAction::List => list(&catalog),
        CatalogAction::Show { id } => show(&catalog, &transformer, &cfg.responsive_widths, &id)?,
        CatalogAction::Check => check(&catalog)?,
    }
    Ok(())
}

fn list(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }
    println!("{:<24} {:<11} {:<8} {}", "ID", "SIZE", "RELATED", "DESCRIPTION");
    for img in catalog.images() {
        println!(
            "{:<24} {:<11} {:<8} {}",
            img.id,
            format!("{}x{}", img.width, img.height),
            img.related_images.len(),
            img.description
        );
    }
}

fn show(catalog: &Catalog, transformer: &UrlTransformer, widths: &[u32], id: &str) -> Result<()> {
    let img = catalog
        .get(id)
        .with_context(|| format!("no image with id {id:?} in catalog"))?;
    println!("id:          {}", img.id);
    println!("description: {}", img.description);
    println!("size:        {} x {}", img.width, img.height);
    println!("url:         {}", img.url);
    println!("grid:        {}", transformer.transform(&img.url, &presets::grid_thumbnail()));
    println!("detail:      {}", transformer.transform(&img.url, &presets::detail()));
    println!("srcset:      {}", transformer.build_source_set(&img.url, widths));

    let related = catalog.related(id);
    if related.is_empty() {
        return Ok(());
    }
    println!("related:");
    for rel in related {
        println!(
            "  {:<22} {}  {}",
            rel.id,
            rel.description,
            transformer.transform(&rel.url, &presets::related_card())
        );
    }
    Ok(())
}

fn check(catalog: &Catalog) -> Result<()> {
    let issues = catalog.check();
    if issues.is_empty() {
        println!("Catalog OK ({} images).", catalog.len());
        return Ok(());
    }
    for issue in &issues {
        println!("{issue}");
    }
    anyhow::bail!("catalog has {} issue(s)", issues.len())
}
