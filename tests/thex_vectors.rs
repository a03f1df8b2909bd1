mod common;

use common::{pattern, reference_root};
use tigertree::output::{render, to_base32, to_hex, truncate, BitLength, Format};
use tigertree::{tth, Tth, BLOCK_SIZE};

// Published THEX test vectors.
const EMPTY: &str = "LWPNACQDBZRYXW3VHJVCJ64QBZNGHOHHHZWCLNQ";
const ONE_ZERO_BYTE: &str = "VK54ZIEEVTWNAUI5D5RDFIL37LX2IQNSTAXFKSA";
const A_1024: &str = "L66Q4YVNAFWVS23X2HJIRA5ZJ7WXR3F26RSASFA";
const A_1025: &str = "PZMRYHGY6LTBEH63ZWAHDORHSYTLO4LEFUIKHWY";

#[test]
fn test_thex_empty() {
    assert_eq!(to_base32(&tth(b"")), EMPTY);
}

#[test]
fn test_thex_one_zero_byte() {
    assert_eq!(to_base32(&tth(&[0u8])), ONE_ZERO_BYTE);
}

#[test]
fn test_thex_1024_a() {
    let data = vec![b'A'; 1024];
    assert_eq!(to_base32(&tth(&data)), A_1024);
}

#[test]
fn test_thex_1025_a() {
    let data = vec![b'A'; 1025];
    assert_eq!(to_base32(&tth(&data)), A_1025);

    // same stream, one byte at a time
    let mut ctx = Tth::new();
    for b in &data {
        ctx.update(std::slice::from_ref(b));
    }
    assert_eq!(to_base32(&ctx.digest()), A_1025);
}

#[test]
fn test_matches_reference_construction() {
    for blocks in 0..=17 {
        for extra in [0, 1, BLOCK_SIZE / 2] {
            let data = pattern(blocks * BLOCK_SIZE + extra);
            assert_eq!(
                tth(&data),
                reference_root(&data),
                "{} blocks + {} bytes",
                blocks,
                extra
            );
        }
    }
}

#[test]
fn test_truncated_projection() {
    let root = tth(&pattern(3 * BLOCK_SIZE + 7));

    let full = render(&root, BitLength::B192, Format::Raw);
    assert_eq!(full, root.to_vec());

    for bits in [BitLength::B160, BitLength::B128] {
        let short = render(&root, bits, Format::Raw);
        assert_eq!(short.len(), bits.bytes());
        assert_eq!(&full[..short.len()], &short[..]);

        let hex = String::from_utf8(render(&root, bits, Format::Hex)).unwrap();
        assert!(to_hex(&root).starts_with(&hex));
        assert_eq!(hex, to_hex(truncate(&root, bits)));
    }

    assert_eq!(
        String::from_utf8(render(&root, BitLength::B192, Format::Thex)).unwrap(),
        to_base32(&root)
    );
}
