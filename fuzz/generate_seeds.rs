#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // P6 2x2
    let p6 = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), p6).unwrap();

    // P6 whose payload starts with whitespace and '#'
    let p6_ws = b"P6\n1 1\n255\n \n#";
    fs::write(format!("{dir}/p6_ws_payload.ppm"), p6_ws).unwrap();

    // P3 2x1 with comments everywhere
    let p3 = b"P3\n# c\n2 # w\n1\n# max\n15\n# px\n15 0 0\n0 15 0\n";
    fs::write(format!("{dir}/p3_comments.ppm"), p3).unwrap();

    // P3 maxval 0
    fs::write(format!("{dir}/p3_black.ppm"), b"P3 1 1 0 0 0 0").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/open_comment.bin"), b"P3\n# no newline").unwrap();
    fs::write(format!("{dir}/long_token.bin"), b"P3\n1 1\n255\n0001 0 0\n").unwrap();
    fs::write(format!("{dir}/p6_short.bin"), b"P6\n1 1\n255\n\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
