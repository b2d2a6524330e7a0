#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let dec = rfc3986_uri::percent_decode(data);
    assert!(dec.len() <= data.len());
});
