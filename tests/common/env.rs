//! Test environment builder for isolated manifest testing.
//!
//! Provides `TestEnv` - a temp directory holding manifests, a static root
//! and an optional config file, plus helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::STATIC_FILES;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with a temp directory.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_webpack-manifest")),
        }
    }

    /// Environment with every fixture asset written under `static/`
    pub fn with_static_files() -> Self {
        let env = Self::new();
        for (rel_path, content) in STATIC_FILES {
            env.write_file(&format!("static/{}", rel_path), content);
        }
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn static_root(&self) -> PathBuf {
        self.path("static")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a manifest document and return its absolute path
    pub fn write_manifest(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(name, content)
    }

    /// Write `webpack-manifest.toml` with a single `main` bundle
    pub fn write_config(&self, manifest: &Path, extra: &str) {
        let config = format!(
            "[manifests.main]\npath = {:?}\nstatic_url = \"/static/\"\nstatic_root = {:?}\n{}",
            manifest.display().to_string(),
            self.static_root().display().to_string(),
            extra
        );
        self.write_file("webpack-manifest.toml", &config);
    }

    /// Run the CLI from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .args(args)
            .env_remove("WEBPACK_MANIFEST_DEBUG")
            .env_remove("WEBPACK_MANIFEST_TIMEOUT")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute webpack-manifest");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
