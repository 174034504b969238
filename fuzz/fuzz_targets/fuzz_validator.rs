#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_yaml_ng::Mapping;
use socket_configurator::PolicyValidator;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(map) = serde_yaml_ng::from_str::<Mapping>(content) else {
        return;
    };

    let validator = PolicyValidator::new();
    let _ = validator.validate_org(&map);
    let _ = validator.validate_repository("fuzz", &map);
    let _ = validator.validate_socket_yml(&map);
});
