use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::model::BuildManifest;
use crate::util::sha256_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtifactState {
    Missing,
    Fresh,
    Stale,
}

pub fn run(args: StatusArgs) -> Result<()> {
    let manifest_path = &args.manifest_path;

    info!(path = %manifest_path.display(), "status requested");

    if !manifest_path.exists() {
        warn!(path = %manifest_path.display(), "build manifest missing");
        return Ok(());
    }

    let raw = fs::read(manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let manifest: BuildManifest = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

    info!(
        generated_at = %manifest.generated_at,
        chapters = manifest.chapter_count,
        front_matter_dropped = manifest.front_matter_dropped,
        missing_titles = manifest.missing_titles.len(),
        duplicate_titles = manifest.duplicate_titles.len(),
        "loaded build manifest"
    );

    report_artifact(
        "input",
        Path::new(&manifest.input_path),
        &manifest.input_sha256,
    )?;
    report_artifact(
        "output",
        Path::new(&manifest.output_path),
        &manifest.output_sha256,
    )?;

    Ok(())
}

fn report_artifact(role: &str, path: &Path, recorded_sha256: &str) -> Result<()> {
    match artifact_state(path, recorded_sha256)? {
        ArtifactState::Fresh => {
            info!(role, path = %path.display(), "artifact matches manifest");
        }
        ArtifactState::Stale => {
            warn!(role, path = %path.display(), "artifact changed since last build");
        }
        ArtifactState::Missing => {
            warn!(role, path = %path.display(), "artifact missing");
        }
    }
    Ok(())
}

fn artifact_state(path: &Path, recorded_sha256: &str) -> Result<ArtifactState> {
    if !path.exists() {
        return Ok(ArtifactState::Missing);
    }

    if sha256_file(path)? == recorded_sha256 {
        Ok(ArtifactState::Fresh)
    } else {
        Ok(ArtifactState::Stale)
    }
}
