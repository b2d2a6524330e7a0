#![no_main]
use libfuzzer_sys::fuzz_target;
use rfc3986_uri::{class, pct_enc};

fuzz_target!(|data: &str| {
    for table in [class::PATH, class::QUERY, class::USERINFO, class::UNRESERVED] {
        let encoded = pct_enc::encode(data, table);
        assert!(encoded
            .bytes()
            .all(|x| x == b'%' || table.allows(x as char)));
        assert_eq!(pct_enc::decode(&encoded).to_string().as_deref(), Ok(data));
    }
});
