//! Bounded writes into caller-owned memory.

use crate::sink::Sink;
use crate::view::View;

/// The remaining writable space of a fixed destination.
///
/// Each write fills the front of the space and advances past it, so the
/// `ViewMut` always describes what is still available. Writes that do not
/// fit are truncated, never grown; use [`Buffer`](crate::Buffer) when the
/// output size is unbounded.
///
/// [`written()`](Self::written) counts the bytes written through this
/// writer, which is the length of the filled prefix of the destination once
/// the writer is dropped.
///
/// # Examples
///
/// ```
/// use parsebuf::{View, ViewMut};
///
/// let mut storage = [0u8; 32];
/// let mut available = ViewMut::new(&mut storage);
/// available.write(View::from("hello"));
/// available.write(View::from(" ... goodbye"));
/// let used = available.written();
///
/// assert_eq!(&storage[..used], b"hello ... goodbye");
/// ```
#[derive(Debug, Default)]
pub struct ViewMut<'a> {
    /// Space not yet written.
    data: &'a mut [u8],
    /// Bytes written since creation.
    written: usize,
}

impl<'a> ViewMut<'a> {
    /// Create a writer over `dest`.
    #[must_use]
    pub fn new(dest: &'a mut [u8]) -> Self {
        ViewMut {
            data: dest,
            written: 0,
        }
    }

    /// Returns the remaining writable space.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no space remains.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes written so far.
    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Returns a view of the remaining space.
    #[must_use]
    pub fn as_view(&self) -> View<'_> {
        View::new(&*self.data)
    }

    /// Split `n` bytes off the front of the remaining space.
    fn advance(&mut self, n: usize) -> &'a mut [u8] {
        let (head, tail) = std::mem::take(&mut self.data).split_at_mut(n);
        self.data = tail;
        self.written += n;
        head
    }

    /// Copy as much of `src` as fits, returning the number of bytes written.
    pub fn write(&mut self, src: View<'_>) -> usize {
        let size = self.len().min(src.len());
        self.advance(size).copy_from_slice(&src[..size]);
        size
    }

    /// Write `byte` up to `count` times, returning the number written.
    pub fn write_repeated(&mut self, byte: u8, count: usize) -> usize {
        let size = self.len().min(count);
        self.advance(size).fill(byte);
        size
    }

    /// Write a single byte. Returns false if there was no space.
    pub fn write_byte(&mut self, byte: u8) -> bool {
        self.write_repeated(byte, 1) == 1
    }
}

impl Sink for ViewMut<'_> {
    fn write(&mut self, src: View<'_>) -> usize {
        ViewMut::write(self, src)
    }

    fn write_repeated(&mut self, byte: u8, count: usize) -> usize {
        ViewMut::write_repeated(self, byte, count)
    }
}
