use anyhow::{Context, Result};
use webpack_manifest::domain::ports::ManifestSource;
use webpack_manifest::{Config, JsonManifestReader};

/// Report the manifest's status without polling or caching
pub fn cmd_status(config: &Config, bundle: &str, json: bool) -> Result<()> {
    let (path, options) = config.bundle(bundle)?.load_options(bundle)?;
    let data = JsonManifestReader::new()
        .read(&path, options.effective_read_retry())
        .with_context(|| format!("reading manifest for bundle '{}'", bundle))?;
    let status = data.status();

    if json {
        let output = serde_json::json!({
            "bundle": bundle,
            "path": path.display().to_string(),
            "status": status.as_str(),
            "entries": data.entry_names(),
            "errors": data.error_messages(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}: {}", bundle, status);
    for name in data.entry_names() {
        println!("  entry {}", name);
    }
    for error in data.error_messages() {
        println!("  error {}", error.lines().next().unwrap_or_default());
    }

    Ok(())
}
