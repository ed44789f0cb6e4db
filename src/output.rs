//! Artifact writing for generated packages.
//!
//! Each artifact is written to a sibling temp file and renamed into place so
//! a failed run never leaves a half-written file behind.
use crate::schema::PromptPackage;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const PACKAGE_JSON_FILE: &str = "prompt_package.json";
pub const PACKAGE_MARKDOWN_FILE: &str = "prompt_package.md";
pub const SINGLE_PROMPT_FILE: &str = "single_prompt.txt";

/// Pretty JSON with two-space indentation.
pub fn package_json(pkg: &PromptPackage) -> Result<String> {
    serde_json::to_string_pretty(pkg).context("serialize prompt package")
}

/// The package JSON wrapped in a fenced `json` code block.
pub fn package_markdown(package_json: &str) -> String {
    format!("```json\n{package_json}\n```")
}

/// Write the JSON, Markdown, and flattened-prompt artifacts into `out_dir`.
pub fn write_artifacts(out_dir: &Path, pkg: &PromptPackage, prompt: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let json = package_json(pkg)?;
    let markdown = package_markdown(&json);

    let mut written = Vec::new();
    for (name, text) in [
        (PACKAGE_JSON_FILE, json.as_str()),
        (PACKAGE_MARKDOWN_FILE, markdown.as_str()),
        (SINGLE_PROMPT_FILE, prompt),
    ] {
        let path = out_dir.join(name);
        write_text(&path, text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

fn write_text(dest: &Path, text: &str) -> Result<()> {
    let file_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("artifact");
    let tmp_path = dest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".{file_name}.tmp"));
    fs::write(&tmp_path, text.as_bytes())
        .with_context(|| format!("write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, dest).with_context(|| format!("publish {}", dest.display()))?;
    Ok(())
}

/// Read a previously written package back from disk.
pub fn read_package(path: &Path) -> Result<PromptPackage> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read package {}", path.display()))?;
    let pkg = serde_json::from_str(&content)
        .with_context(|| format!("parse package JSON {}", path.display()))?;
    Ok(pkg)
}
