#![no_main]
use libfuzzer_sys::fuzz_target;
use zenppm::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive re-encoding in both variants
    let Ok(decoded) = decode(data) else {
        return;
    };

    for variant in [Variant::Ascii, Variant::Binary] {
        let reencoded = EncodeRequest::new(variant)
            .encode(&decoded, enough::Unstoppable)
            .expect("encoding a decoded image cannot fail");
        let Ok(decoded2) = decode(&reencoded) else {
            panic!("re-encoded {variant:?} data failed to decode");
        };
        assert_eq!(decoded, decoded2, "{variant:?} roundtrip mismatch");
    }
});
