use anyhow::Result;
use webpack_manifest::{AssetKind, Config, ManifestLoader};

pub fn cmd_render(
    config: &Config,
    bundle: &str,
    entry: &str,
    kinds: &[AssetKind],
    inline: bool,
    json: bool,
) -> Result<()> {
    let manifest = ManifestLoader::new().load_named(config, bundle)?;
    let entry_group = manifest.entry(entry)?;

    let mut rendered = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let group = entry_group.group(*kind);
        let html = if inline {
            group.inline()?
        } else {
            group.output().to_string()
        };
        rendered.push((*kind, html));
    }

    if json {
        let output: serde_json::Map<String, serde_json::Value> = rendered
            .into_iter()
            .map(|(kind, html)| (kind.name().to_string(), serde_json::Value::String(html)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (_, html) in rendered {
        if !html.is_empty() {
            println!("{}", html);
        }
    }

    Ok(())
}
