#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenppm::Header::from_bytes(data);
    let limits = zenppm::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let _ = zenppm::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
