#![no_main]
use libfuzzer_sys::fuzz_target;
use rfc3986_uri::{CharPolicy, Uri};

fuzz_target!(|data: &str| {
    let uri = match Uri::parse_with(data, CharPolicy::Reject) {
        Ok(uri) => uri,
        Err(e) => {
            assert!(e.index() <= data.len());
            return;
        }
    };

    // Nothing is dropped, so every component is a slice of the input.
    for s in [uri.authority(), uri.path(), uri.query(), uri.fragment()] {
        assert!(data.contains(s.as_str()));
    }
    assert_eq!(Uri::parse(data), Ok(uri.clone()));

    let s = uri.to_string();
    assert!(s.len() <= data.len());
    // Path and authority are left out: a "//" path under an empty
    // authority reads back as an authority.
    if let Ok(reparsed) = Uri::parse(&s) {
        assert_eq!(reparsed.scheme(), uri.scheme());
        assert_eq!(reparsed.query(), uri.query());
        assert_eq!(reparsed.fragment(), uri.fragment());
    }
});
