#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must never panic, and neither may bundle validation
        if let Ok(config) = toml::from_str::<webpack_manifest::Config>(content) {
            for (name, bundle) in &config.manifests {
                let _ = bundle.load_options(name);
            }
        }
    }
});
