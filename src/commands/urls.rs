use anyhow::Result;
use webpack_manifest::{AssetKind, Config, ManifestLoader};

pub fn cmd_urls(
    config: &Config,
    bundle: &str,
    entry: &str,
    kinds: &[AssetKind],
    json: bool,
) -> Result<()> {
    let manifest = ManifestLoader::new().load_named(config, bundle)?;
    let entry_group = manifest.entry(entry)?;

    if json {
        let mut output = serde_json::Map::new();
        for kind in kinds {
            output.insert(
                kind.name().to_string(),
                serde_json::json!(entry_group.group(*kind).urls()),
            );
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for kind in kinds {
        for url in entry_group.group(*kind).urls() {
            println!("{}", url);
        }
    }

    Ok(())
}
