//! The Sink trait for writing bytes.

use crate::view::View;

/// Write bytes to a destination.
///
/// This is the common interface of the bounded [`ViewMut`](crate::ViewMut),
/// which truncates writes that do not fit, and the growable
/// [`Buffer`](crate::Buffer), which always accepts the full input. Code that
/// renders output (escaping, indentation) can be written once against
/// `Sink` and used with either.
///
/// # Required Methods
///
/// - [`write()`](Sink::write): Copy a view, returning the bytes accepted
/// - [`write_repeated()`](Sink::write_repeated): Fill with a repeated byte
///
/// # Examples
///
/// ```
/// use parsebuf::{Buffer, Sink, ViewMut};
///
/// fn indent<S: Sink>(out: &mut S, depth: usize) -> usize {
///     out.write_repeated(b' ', depth * 2)
/// }
///
/// let mut small = [0u8; 3];
/// assert_eq!(indent(&mut ViewMut::new(&mut small), 2), 3);
///
/// let mut buf = Buffer::empty();
/// assert_eq!(indent(&mut buf, 2), 4);
/// ```
pub trait Sink {
    /// Copy `src` into the sink, returning the number of bytes accepted.
    fn write(&mut self, src: View<'_>) -> usize;

    /// Write `byte` up to `count` times, returning the number accepted.
    fn write_repeated(&mut self, byte: u8, count: usize) -> usize;

    // === Default implementations ===

    /// Write a single byte. Returns false if it was not accepted.
    fn write_byte(&mut self, byte: u8) -> bool {
        self.write_repeated(byte, 1) == 1
    }

    /// Copy a byte slice into the sink.
    fn write_slice(&mut self, src: &[u8]) -> usize {
        self.write(View::new(src))
    }

    /// Copy the UTF-8 bytes of `src` into the sink.
    ///
    /// A bounded sink may cut the string inside a multi-byte character.
    fn write_str(&mut self, src: &str) -> usize {
        self.write(View::from(src))
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, src: View<'_>) -> usize {
        (**self).write(src)
    }

    fn write_repeated(&mut self, byte: u8, count: usize) -> usize {
        (**self).write_repeated(byte, count)
    }

    fn write_byte(&mut self, byte: u8) -> bool {
        (**self).write_byte(byte)
    }

    fn write_slice(&mut self, src: &[u8]) -> usize {
        (**self).write_slice(src)
    }

    fn write_str(&mut self, src: &str) -> usize {
        (**self).write_str(src)
    }
}
