use enough::Unstoppable;
use zenppm::*;

fn gradient(w: u32, h: u32, max: u8) -> Image {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let m = u32::from(max) + 1;
            pixels.push(RGB8::new(
                ((x * 37) % m) as u8,
                ((y * 91) % m) as u8,
                ((x * y + 5) % m) as u8,
            ));
        }
    }
    Image::new(w, h, max, pixels).unwrap()
}

#[test]
fn p6_concrete_scenario() {
    let mut data = b"P6\n2 1\n255\n".to_vec();
    data.extend_from_slice(&[255, 0, 0, 0, 255, 0]);

    let image = decode(&data).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 1);
    assert_eq!(image.max_value(), 255);
    assert_eq!(
        image.pixels(),
        &[RGB8::new(255, 0, 0), RGB8::new(0, 255, 0)]
    );
}

#[test]
fn p3_concrete_scenario() {
    let image = decode(b"P3\n1 1\n255\n10 20 30\n").unwrap();
    assert_eq!(
        (image.width(), image.height(), image.max_value()),
        (1, 1, 255)
    );
    assert_eq!(image.pixels(), &[RGB8::new(10, 20, 30)]);
}

#[test]
fn p6_roundtrip() {
    let image = gradient(7, 5, 255);
    let encoded = encode_p6(&image).unwrap();
    assert_eq!(&encoded[..2], b"P6");
    assert_eq!(decode(&encoded).unwrap(), image);
}

#[test]
fn p3_roundtrip() {
    let image = gradient(5, 4, 255);
    let encoded = encode_p3(&image).unwrap();
    assert_eq!(&encoded[..2], b"P3");
    assert_eq!(decode(&encoded).unwrap(), image);
}

#[test]
fn roundtrip_with_small_maxval() {
    for max in [0u8, 1, 15, 100] {
        let image = gradient(3, 3, max);
        assert_eq!(decode(&encode_p6(&image).unwrap()).unwrap(), image);
        assert_eq!(decode(&encode_p3(&image).unwrap()).unwrap(), image);
    }
}

#[test]
fn p6_roundtrip_payload_starting_with_whitespace_bytes() {
    // First pixel bytes are '\n', ' ' and '#'; they must not be taken as
    // header padding or a comment.
    let pixels = vec![RGB8::new(b'\n', b' ', b'#'), RGB8::new(b'\t', 0, 255)];
    let image = Image::new(2, 1, 255, pixels).unwrap();
    let encoded = encode_p6(&image).unwrap();
    assert_eq!(decode(&encoded).unwrap(), image);
}

#[test]
fn encode_request_matches_shortcuts() {
    let image = gradient(4, 2, 200);
    assert_eq!(
        EncodeRequest::binary().encode(&image, Unstoppable).unwrap(),
        encode_p6(&image).unwrap()
    );
    assert_eq!(
        EncodeRequest::new(Variant::Ascii)
            .encode(&image, Unstoppable)
            .unwrap(),
        encode_p3(&image).unwrap()
    );
}

#[test]
fn comments_are_transparent() {
    let plain = b"P3\n2 1\n255\n1 2 3 4 5 6\n";
    let commented =
        b"P3\n# made by hand\n2 # width\n# height next\n1\n#\n255\n# pixels\n1 2 3 4 5 6\n";
    let spaced = b"P3   \n\n 2\t\t1 \r\n 255 \n\n1 2 3 4 5 6";
    let expected = decode(plain).unwrap();
    assert_eq!(decode(commented).unwrap(), expected);
    assert_eq!(decode(spaced).unwrap(), expected);

    let mut plain6 = b"P6\n1 1\n255\n".to_vec();
    plain6.extend_from_slice(b"abc");
    let mut commented6 = b"P6\n#c\n1\n#c\n1\n#c\n255\n# last\n".to_vec();
    commented6.extend_from_slice(b"abc");
    assert_eq!(decode(&commented6).unwrap(), decode(&plain6).unwrap());
}

#[test]
fn transcode_between_variants() {
    let image = gradient(6, 3, 255);
    let p3 = encode_p3(&image).unwrap();
    let p6 = transcode(&p3, Variant::Binary).unwrap();
    assert_eq!(p6, encode_p6(&image).unwrap());
    let back = transcode(&p6, Variant::Ascii).unwrap();
    assert_eq!(back, p3);
}

#[test]
fn header_probe_matches_decode() {
    let image = gradient(9, 4, 77);
    let encoded = encode_p6(&image).unwrap();
    let header = Header::from_bytes(&encoded).unwrap();
    assert_eq!(header, Header::for_image(&image, Variant::Binary));
}

#[cfg(feature = "std")]
#[test]
fn reader_and_writer_roundtrip() {
    let image = gradient(3, 2, 255);
    let header = Header::for_image(&image, Variant::Ascii);
    let mut out = Vec::new();
    encode(&header, &image, &mut out).unwrap();
    let decoded = decode_from_reader(std::io::Cursor::new(out)).unwrap();
    assert_eq!(decoded, image);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let image = gradient(4, 3, 255);
    let view = image.as_imgref();
    assert_eq!(view.width(), 4);
    assert_eq!(view.height(), 3);
    assert_eq!(*view.buf(), image.pixels());
}
