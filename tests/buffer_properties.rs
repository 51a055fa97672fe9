//! Property tests for the growable buffer.
//!
//! Verifies that no sequence of writes loses data across growth events, that
//! UTF-8 output matches the standard library encoder, and that trim/free
//! never touch the caller's initial range.

mod common;

use common::{init_test_logging, test_proptest_config};
use parsebuf::{Buffer, View};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

#[derive(Debug, Clone)]
enum WriteOp {
    Bytes(Vec<u8>),
    Byte(u8),
    Repeated(u8, usize),
    Codepoint(u32),
}

fn arb_write() -> impl Strategy<Value = WriteOp> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..=300).prop_map(WriteOp::Bytes),
        any::<u8>().prop_map(WriteOp::Byte),
        (any::<u8>(), 0usize..=700).prop_map(|(b, n)| WriteOp::Repeated(b, n)),
        (0u32..0x12_0000).prop_map(WriteOp::Codepoint),
    ]
}

/// Apply `write` to `buf` and to the model, returning whether it succeeded.
fn apply(buf: &mut Buffer<'_>, model: &mut Vec<u8>, write: &WriteOp) -> bool {
    match write {
        WriteOp::Bytes(bytes) => {
            assert_eq!(buf.write(View::new(bytes)), bytes.len());
            model.extend_from_slice(bytes);
            true
        }
        WriteOp::Byte(b) => {
            assert!(buf.write_byte(*b));
            model.push(*b);
            true
        }
        WriteOp::Repeated(b, n) => {
            assert_eq!(buf.write_repeated(*b, *n), *n);
            model.extend(std::iter::repeat(*b).take(*n));
            true
        }
        WriteOp::Codepoint(cp) => {
            let ok = buf.write_codepoint_utf8(*cp);
            if let Some(ch) = char::from_u32(*cp) {
                let mut tmp = [0u8; 4];
                model.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
            }
            ok
        }
    }
}

// ============================================================================
// Growth never loses data
// ============================================================================

proptest! {
    #![proptest_config(test_proptest_config(300))]

    #[test]
    fn writes_from_zero_capacity_are_preserved(writes in prop::collection::vec(arb_write(), 0..40)) {
        init_test_logging();
        let mut buf = Buffer::empty();
        let mut model = Vec::new();
        for write in &writes {
            // Surrogates are encoded by the buffer but not by `char`; keep
            // the model comparable by skipping them.
            if let WriteOp::Codepoint(cp) = write {
                if (0xD800..0xE000).contains(cp) {
                    continue;
                }
            }
            let ok = apply(&mut buf, &mut model, write);
            if let WriteOp::Codepoint(cp) = write {
                prop_assert_eq!(ok, *cp < 0x11_0000);
            }
        }
        prop_assert_eq!(buf.contents().as_bytes(), model.as_slice());
        prop_assert!(buf.len() <= buf.capacity());
        if buf.is_owned() {
            prop_assert!(buf.capacity().is_power_of_two());
        }
    }

    #[test]
    fn writes_from_initial_range_are_preserved(
        initial in 0usize..64,
        writes in prop::collection::vec(arb_write(), 0..20),
    ) {
        let mut scratch = vec![0u8; initial];
        let mut buf = Buffer::new(&mut scratch);
        let mut model = Vec::new();
        for write in &writes {
            if matches!(write, WriteOp::Codepoint(cp) if (0xD800..0xE000).contains(cp)) {
                continue;
            }
            apply(&mut buf, &mut model, write);
        }
        prop_assert_eq!(buf.is_owned(), model.len() > initial);
        prop_assert_eq!(buf.contents().as_bytes(), model.as_slice());
    }

    /// Trimming an owned buffer keeps the contents and fits them exactly.
    #[test]
    fn trim_fits_contents(writes in prop::collection::vec(arb_write(), 1..20)) {
        let mut buf = Buffer::empty();
        let mut model = Vec::new();
        for write in &writes {
            if matches!(write, WriteOp::Codepoint(cp) if (0xD800..0xE000).contains(cp)) {
                continue;
            }
            apply(&mut buf, &mut model, write);
        }
        buf.trim();
        if buf.is_owned() {
            prop_assert_eq!(buf.capacity(), model.len());
        }
        prop_assert_eq!(buf.contents().as_bytes(), model.as_slice());
    }
}

// ============================================================================
// UTF-8 encoding
// ============================================================================

proptest! {
    #![proptest_config(test_proptest_config(1000))]

    #[test]
    fn codepoints_match_std_encoder(ch in any::<char>()) {
        let mut buf = Buffer::empty();
        prop_assert!(buf.write_codepoint_utf8(u32::from(ch)));
        let mut expected = [0u8; 4];
        prop_assert_eq!(buf.contents().as_bytes(), ch.encode_utf8(&mut expected).as_bytes());
    }

    #[test]
    fn out_of_range_codepoints_write_nothing(cp in 0x11_0000u32..=u32::MAX) {
        let mut buf = Buffer::empty();
        buf.write(View::from("x"));
        prop_assert!(!buf.write_codepoint_utf8(cp));
        prop_assert_eq!(buf.contents(), "x");
    }
}

#[test]
fn codepoint_sequence_bytes() {
    init_test_logging();
    let mut buf = Buffer::empty();
    for cp in [0x41, 0x20AC, 0x1F600] {
        assert!(buf.write_codepoint_utf8(cp));
    }
    assert_eq!(
        buf.contents().as_bytes(),
        &[0x41, 0xE2, 0x82, 0xAC, 0xF0, 0x9F, 0x98, 0x80]
    );
    assert!(!buf.write_codepoint_utf8(0x11_0000));
    assert_eq!(buf.len(), 8);
}

/// trim and free on a buffer that never grew leave the caller's memory
/// alone: contents written there survive and the buffer never owned it.
#[test]
fn trim_and_free_leave_initial_range_alone() {
    init_test_logging();
    let mut scratch = [0u8; 32];
    {
        let mut buf = Buffer::new(&mut scratch);
        buf.write(View::from("still on the stack"));
        buf.trim();
        assert!(!buf.is_owned());
        assert_eq!(buf.capacity(), 32);
        buf.free();
        buf.free();
        assert!(!buf.is_owned());
        assert_eq!(buf.capacity(), 32);
        assert!(buf.is_empty());
    }
    assert_eq!(&scratch[..18], b"still on the stack");
}

#[test]
fn many_small_writes_grow_geometrically() {
    let mut buf = Buffer::empty();
    let mut growths = 0;
    let mut last_capacity = buf.capacity();
    for i in 0..10_000u32 {
        buf.write_byte((i % 251) as u8);
        if buf.capacity() != last_capacity {
            growths += 1;
            last_capacity = buf.capacity();
        }
    }
    assert_eq!(buf.len(), 10_000);
    assert_eq!(buf.capacity(), 16_384);
    // 1, 2, 4, ..., 16384
    assert_eq!(growths, 15);
}
