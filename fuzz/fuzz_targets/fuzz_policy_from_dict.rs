#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_yaml_ng::Mapping;
use socket_configurator::{OrgPolicy, SocketPolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(map) = serde_yaml_ng::from_str::<Mapping>(content) else {
        return;
    };

    let repo = SocketPolicy::from_dict(&map);
    let org = OrgPolicy::from_dict(&map);
    let merged = org.to_socket_policy().merge(&repo);

    // Parsing the serialized form must reproduce the policy
    assert_eq!(SocketPolicy::from_dict(&merged.to_dict()), merged);
});
