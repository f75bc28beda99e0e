//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use image::{Rgba, RgbaImage};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Geometry tool name that never exists, so dimension checks are skipped.
pub const NO_GEOMETRY_TOOL: &str = "icondex-test-missing-identify";

/// Path to the icondex binary
pub fn icondex_bin() -> &'static str {
    env!("CARGO_BIN_EXE_icondex")
}

/// A temporary repository laid out like the catalog repo.
///
/// ```text
/// <root>/icondex.toml
/// <root>/data/stir/stir-database.json
/// <root>/data/stir/icons/
/// <root>/data/beir/beir-database.json
/// <root>/data/beir/icons/
/// ```
pub struct CatalogRepo {
    temp_dir: TempDir,
}

impl CatalogRepo {
    /// Creates an empty repo with both icon directories and empty catalogs.
    pub fn new() -> Self {
        let repo = Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        };
        fs::create_dir_all(repo.stir_icons()).unwrap();
        fs::create_dir_all(repo.beir_icons()).unwrap();
        repo.write_config(NO_GEOMETRY_TOOL);
        repo.write_stir(&[]);
        repo.write_beir(&[]);
        repo
    }

    /// Creates a repo where every entry is valid and every icon is 64×64.
    pub fn valid() -> Self {
        let repo = Self::new();
        repo.write_stir(&[
            stir_entry("vs-code", "VS Code", "development"),
            stir_entry("firefox", "Firefox", "browser"),
        ]);
        repo.write_beir(&[beir_entry("ublock-origin", "uBlock Origin", "privacy")]);
        repo.write_stir_icon("vs-code.png", 64, 64);
        repo.write_stir_icon("firefox.png", 64, 64);
        repo.write_beir_icon("ublock-origin.png", 64, 64);
        repo
    }

    /// Repository root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// STIR icon directory.
    pub fn stir_icons(&self) -> PathBuf {
        self.root().join("data/stir/icons")
    }

    /// BEIR icon directory.
    pub fn beir_icons(&self) -> PathBuf {
        self.root().join("data/beir/icons")
    }

    /// Writes `icondex.toml` with the given geometry tool.
    pub fn write_config(&self, geometry_tool: &str) {
        fs::write(
            self.root().join("icondex.toml"),
            format!("geometry_tool = \"{geometry_tool}\"\n"),
        )
        .unwrap();
    }

    /// Writes the STIR catalog with the given entries.
    pub fn write_stir(&self, entries: &[Value]) {
        self.write_raw_stir(&json!({ "icons": entries }));
    }

    /// Writes the BEIR catalog with the given entries.
    pub fn write_beir(&self, entries: &[Value]) {
        self.write_raw_beir(&json!({ "icons": entries }));
    }

    /// Writes an arbitrary STIR document.
    pub fn write_raw_stir(&self, document: &Value) {
        let path = self.root().join("data/stir/stir-database.json");
        fs::write(path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    }

    /// Writes an arbitrary BEIR document.
    pub fn write_raw_beir(&self, document: &Value) {
        let path = self.root().join("data/beir/beir-database.json");
        fs::write(path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    }

    /// Writes a solid PNG into the STIR icon directory.
    pub fn write_stir_icon(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.stir_icons().join(name);
        write_png(&path, width, height);
        path
    }

    /// Writes a solid PNG into the BEIR icon directory.
    pub fn write_beir_icon(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.beir_icons().join(name);
        write_png(&path, width, height);
        path
    }

    /// Runs icondex against this repo.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(icondex_bin())
            .arg("--root")
            .arg(self.root())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute command")
    }
}

/// Writes a solid opaque PNG.
pub fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([40, 120, 200, 255]))
        .save(path)
        .expect("Failed to write PNG");
}

/// A valid STIR entry whose icon is `icons/<id>.png`.
pub fn stir_entry(id: &str, name: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "icon_path": format!("icons/{id}.png"),
        "platforms": { "windows": true, "mac": true, "linux": false },
        "description": format!("{name} icon")
    })
}

/// A valid BEIR entry whose icon is `icons/<id>.png`.
pub fn beir_entry(id: &str, name: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "icon_path": format!("icons/{id}.png"),
        "browsers": { "chrome": true, "firefox": true }
    })
}

/// Stdout of a finished command.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished command.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
