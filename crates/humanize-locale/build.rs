//! Build script for humanize-locale crate
//!
//! Bundles every `locales/<tag>/*.po` catalog into the binary and validates
//! at compile time that:
//! - every locale directory name is a canonical language tag
//! - every catalog is UTF-8
//! - every `msgid` is followed by a `msgstr` before the next entry

use std::collections::BTreeMap;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use unic_langid::LanguageIdentifier;

/// Check the entry structure of a single catalog
fn validate_catalog(content: &str) -> Result<usize, String> {
    let mut entries = 0;
    let mut pending_msgid: Option<usize> = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("msgid_plural") {
            if pending_msgid.is_none() {
                return Err(format!("line {}: msgid_plural without msgid", index + 1));
            }
        } else if line.starts_with("msgid") {
            if let Some(open) = pending_msgid {
                return Err(format!("line {}: msgid has no msgstr", open));
            }
            pending_msgid = Some(index + 1);
        } else if line.starts_with("msgstr") {
            if pending_msgid.take().is_some() {
                entries += 1;
            } else if !line.starts_with("msgstr[") {
                return Err(format!("line {}: msgstr without msgid", index + 1));
            }
        } else if !line.starts_with('"') && !line.starts_with("msgctxt") {
            return Err(format!("line {}: unexpected content", index + 1));
        }
    }

    if let Some(open) = pending_msgid {
        return Err(format!("line {}: msgid has no msgstr", open));
    }

    Ok(entries)
}

/// Collect the catalogs of one locale directory, sorted by file name
fn collect_catalogs(dir: &Path) -> Result<Vec<(String, PathBuf)>, String> {
    let mut catalogs = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {}", dir.display(), e))? {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("po") {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("Invalid catalog file name: {}", path.display()))?
            .to_string();

        let bytes = fs::read(&path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let content = String::from_utf8(bytes)
            .map_err(|_| format!("{} is not valid UTF-8", path.display()))?;
        validate_catalog(&content).map_err(|e| format!("{}: {}", path.display(), e))?;

        catalogs.push((name, path));
    }

    catalogs.sort();
    Ok(catalogs)
}

/// Find and validate every locale directory
fn find_locales(locales_dir: &Path) -> Result<BTreeMap<String, Vec<(String, PathBuf)>>, String> {
    let mut locales = BTreeMap::new();

    if !locales_dir.exists() {
        return Ok(locales);
    }

    let mut errors = Vec::new();

    for entry in fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {}", e))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let tag = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?
            .to_string();

        match tag.parse::<LanguageIdentifier>() {
            Ok(langid) if langid.to_string() == tag => {}
            Ok(langid) => {
                errors.push(format!("{}: directory must use canonical tag '{}'", tag, langid));
                continue;
            }
            Err(e) => {
                errors.push(format!("{}: invalid language tag ({})", tag, e));
                continue;
            }
        }

        match collect_catalogs(&path) {
            Ok(catalogs) => {
                locales.insert(tag, catalogs);
            }
            Err(e) => errors.push(format!("{}: {}", tag, e)),
        }
    }

    if !errors.is_empty() {
        return Err(errors.join("\n"));
    }

    Ok(locales)
}

/// Render the generated table of embedded catalogs
fn render_table(locales: &BTreeMap<String, Vec<(String, PathBuf)>>) -> String {
    let mut out = String::from("pub(crate) static EMBEDDED_LOCALES: &[EmbeddedLocale] = &[\n");

    for (tag, catalogs) in locales {
        let _ = writeln!(out, "    EmbeddedLocale {{\n        tag: {:?},\n        files: &[", tag);
        for (name, path) in catalogs {
            let _ = writeln!(
                out,
                "            EmbeddedFile {{ name: {:?}, bytes: include_bytes!({:?}) }},",
                name,
                path.display().to_string()
            );
        }
        out.push_str("        ],\n    },\n");
    }

    out.push_str("];\n");
    out
}

fn generate() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let out_dir = env::var("OUT_DIR").map_err(|_| "OUT_DIR not set")?;

    let locales = find_locales(&Path::new(&manifest_dir).join("locales"))?;
    for (tag, catalogs) in &locales {
        println!("cargo:rerun-if-changed=locales/{}", tag);
        for (name, _) in catalogs {
            println!("cargo:rerun-if-changed=locales/{}/{}", tag, name);
        }
    }

    let out_path = Path::new(&out_dir).join("embedded_catalogs.rs");
    fs::write(&out_path, render_table(&locales))
        .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))
}

fn main() {
    if let Err(e) = generate() {
        eprintln!("Locale catalog validation failed:\n{}", e);
        process::exit(1);
    }
}
