//! parsebuf: allocation-free byte views and growable buffers for parsers.
//!
//! # Overview
//!
//! Hand-written parsers spend most of their time looking at the next few
//! bytes of input and copying runs of bytes to output. This crate provides
//! the two primitives for doing both without per-character allocation:
//!
//! - [`View`]: a non-owning reference to a byte range with cursor-style
//!   `consume_*` operations, clamped slicing and byte-wise ordering
//! - [`Buffer`]: a growable output buffer that writes into caller-supplied
//!   memory first and only allocates once it outgrows it
//!
//! # Module Structure
//!
//! - [`view`]: Read-side operations on byte ranges
//! - [`view_mut`]: Bounded writes into fixed caller-owned memory
//! - [`sink`]: The [`Sink`] trait shared by bounded and growable writers
//! - [`buffer`]: The growable [`Buffer`] and UTF-8 codepoint output
//! - [`growth`]: Power-of-two capacity policy
//! - [`error`]: Error type for the checked `try_*` operations
//!
//! # Failure Model
//!
//! Expected outcomes (a prefix that does not match, a slice request that
//! had to be clamped, a value outside the Unicode range) are reported
//! through `bool` and `Option` results. Measuring a view against a range it
//! does not belong to is a caller bug and panics. Allocation failure aborts.
//!
//! # Example
//!
//! ```
//! use parsebuf::{Buffer, View};
//!
//! let mut input = View::from("  \"caf\\u00e9\"");
//! input.consume_while(|b| b == b' ');
//! assert!(input.consume_prefix(View::from("\"")));
//!
//! let mut scratch = [0u8; 64];
//! let mut out = Buffer::new(&mut scratch);
//! let mut run = input;
//! run.consume_while(|b| b != b'\\' && b != b'"');
//! out.write(input.prefix_before(run));
//!
//! input = run;
//! assert!(input.consume_prefix(View::from("\\u")));
//! let (hex, _) = input.slice(0, 4);
//! let codepoint = u32::from_str_radix(std::str::from_utf8(&hex).unwrap(), 16).unwrap();
//! out.write_codepoint_utf8(codepoint);
//!
//! assert_eq!(out.contents(), "café");
//! assert!(!out.is_owned());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod buffer;
pub mod error;
pub mod growth;
pub mod sink;
pub mod view;
pub mod view_mut;

pub(crate) mod tracing_compat;

#[cfg(test)]
pub(crate) mod test_utils;

pub use buffer::Buffer;
pub use error::{Error, Result};
pub use sink::Sink;
pub use view::View;
pub use view_mut::ViewMut;
