//! Build driver.
//!
//! Owns all I/O around the pure pipeline core:
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_manifest()      ──► DocumentSet (path uniqueness enforced)
//!     │
//!     ├── Collections::derive() ─► filter + sort per collection
//!     │
//!     ├── write_collections()  ──► <out>/collections.json for the engine
//!     │
//!     ├── write_markdown_options() ─► <out>/markdown.json for the engine's
//!     │                               renderer (parser + anchor contract)
//!     │
//!     └── postprocess_html()   ──► minify emitted *.html in place
//!                                  (production only; dev skips the walk)
//! ```

use crate::{
    cli::BuildArgs,
    collections::{CollectionKind, Collections},
    config::{Environment, SiteConfig},
    document::{Document, DocumentSet},
    log,
    utils::minify::transform_html,
};
use anyhow::{Context, Result};
use std::{borrow::Cow, collections::BTreeMap, fs, path::Path};
use walkdir::WalkDir;

/// Derive all collections from the manifest and post-process emitted HTML.
pub fn build_site(config: &SiteConfig, args: &BuildArgs) -> Result<()> {
    let env = config.environment;
    log!("build"; "environment: {}", env.name());

    let docs = load_manifest(&args.manifest)?;
    log!("manifest"; "{} documents", docs.len());

    let collections = Collections::derive(&docs, env);
    for kind in CollectionKind::ALL {
        log!(kind.name(); "{} documents", collections.get(kind).len());
    }
    write_collections(&collections, &args.out)?;
    write_markdown_options(config, &args.out)?;

    if let Some(html_dir) = &args.html_dir {
        postprocess_html(html_dir, env)?;
    }

    log!("build"; "done");
    Ok(())
}

/// Read the engine's document manifest and assemble the document set.
fn load_manifest(path: &Path) -> Result<DocumentSet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    let docs: Vec<Document> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
    let set = DocumentSet::new(docs)
        .with_context(|| format!("Invalid manifest: {}", path.display()))?;
    Ok(set)
}

/// Write `collections.json`: collection name → ordered document paths.
fn write_collections(collections: &Collections, out: &Path) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let index: BTreeMap<&str, Vec<&str>> = CollectionKind::ALL
        .into_iter()
        .map(|kind| {
            let paths = collections
                .get(kind)
                .iter()
                .map(|doc| doc.path.as_str())
                .collect();
            (kind.name(), paths)
        })
        .collect();

    let path = out.join("collections.json");
    let json = serde_json::to_string_pretty(&index)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write `markdown.json`: the renderer options and heading-anchor contract
/// the external engine pairs with the anchor slugs.
fn write_markdown_options(config: &SiteConfig, out: &Path) -> Result<()> {
    let path = out.join("markdown.json");
    let json = serde_json::to_string_pretty(&config.markdown)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Run the post-render transform over every `.html` file under `dir`.
///
/// Development builds skip the walk entirely: the transform is a guaranteed
/// no-op there, and an unreadable file must not halt a build that would
/// never rewrite it. Any transform failure aborts the build with the
/// offending path.
fn postprocess_html(dir: &Path, env: Environment) -> Result<()> {
    if !env.is_production() {
        return Ok(());
    }

    let mut minified = 0usize;

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !path.to_string_lossy().ends_with(".html") {
            continue;
        }

        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if let Cow::Owned(output) = transform_html(&html, Some(path), env)? {
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            minified += 1;
        }
    }

    log!("minify"; "{} files minified", minified);
    Ok(())
}
