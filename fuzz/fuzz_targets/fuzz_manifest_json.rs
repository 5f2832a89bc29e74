#![no_main]

use libfuzzer_sys::fuzz_target;
use webpack_manifest::domain::entities::EntryGroup;
use webpack_manifest::domain::value_objects::StaticUrl;
use webpack_manifest::infrastructure::MemoryFs;
use webpack_manifest::RawManifestData;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(manifest) = RawManifestData::from_json(content) {
            let _ = manifest.status();
            let static_url = StaticUrl::new("/static");
            let fs = std::sync::Arc::new(MemoryFs::new());
            let _ = manifest.error_messages();
            if let Ok(files) = manifest.entry_files() {
                for paths in files.values() {
                    let entry = EntryGroup::build(paths, &static_url, None, fs.clone());
                    let _ = entry.script().output();
                    let _ = entry.stylesheet().output();
                }
            }
        }
    }
});
