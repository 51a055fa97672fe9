//! Fuzz target for view consumption and buffer writes.
//!
//! Drives the consume/slice operations with arbitrary input and copies every
//! consumed run into a small stack-backed buffer, checking that the buffer
//! always ends up holding exactly the bytes that were consumed.
//!
//! # Running
//! ```bash
//! cargo +nightly fuzz run view_consume
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use parsebuf::{Buffer, View};

fuzz_target!(|data: &[u8]| {
    let Some((&control, rest)) = data.split_first() else {
        return;
    };

    let whole = View::new(rest);
    let mut input = whole;
    let mut scratch = [0u8; 8];
    let mut out = Buffer::new(&mut scratch);

    while !input.is_empty() {
        let before = input;
        match control % 4 {
            0 => {
                input.consume_while(|b| b.is_ascii_alphanumeric());
            }
            1 => {
                let (head, exact) = input.slice(0, usize::from(control));
                assert!(head.len() <= input.len());
                if exact {
                    assert_eq!(head.len(), usize::from(control));
                }
                input.consume(head.len());
            }
            2 => {
                let prefix = View::new(&rest[..rest.len().min(2)]);
                input.consume_prefix(prefix);
            }
            _ => {
                if let Some(b) = input.first_byte() {
                    let codepoint = u32::from(b) << 8;
                    let mut encoded = Buffer::empty();
                    assert!(encoded.write_codepoint_utf8(codepoint));
                    let surrogate = (0xD800..0xE000).contains(&codepoint);
                    assert_eq!(std::str::from_utf8(&encoded.contents()).is_ok(), !surrogate);
                }
            }
        }
        if input.len() == before.len() {
            input.consume(1);
        }
        out.write(before.prefix_before(input));
    }

    assert_eq!(out.contents(), whole.prefix_before(input));
    assert_eq!(whole.substring_offset(input), rest.len());
    out.trim();
    out.free();
});
