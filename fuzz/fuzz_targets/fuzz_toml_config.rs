#![no_main]

use libfuzzer_sys::fuzz_target;
use textstat_config::TomlConfig;

const MAX_INPUT_SIZE: usize = 8 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = TomlConfig::parse(s)
        && let Ok(serialized) = toml::to_string(&config)
    {
        let reparsed = TomlConfig::parse(&serialized).expect("serialized config must parse");
        assert_eq!(config, reparsed);
    }
});
