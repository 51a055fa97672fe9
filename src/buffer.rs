//! Growable byte buffer that starts on caller-supplied memory.

use crate::error::{Error, Result};
use crate::growth;
use crate::sink::Sink;
use crate::tracing_compat::trace;
use crate::view::View;
use crate::view_mut::ViewMut;

/// Exclusive upper bound of the Unicode codepoint range.
const CODEPOINT_LIMIT: u32 = 0x11_0000;

/// Growable output buffer.
///
/// A `Buffer` starts on an *initial range* of memory supplied by the caller,
/// often a stack array, and writes there without allocating. Once a write
/// does not fit it moves its contents to a heap allocation that it owns and
/// keeps growing that. The initial range is only ever borrowed: it is never
/// resized or freed, and [`free()`](Self::free) returns the buffer to it.
///
/// Writes never fail and never truncate; growth follows the power-of-two
/// policy in [`growth`](crate::growth).
///
/// [`contents()`](Self::contents) borrows the buffer, so a view of the
/// contents cannot be held across a write that might move them.
///
/// # Examples
///
/// ```
/// use parsebuf::{Buffer, View};
///
/// let mut scratch = [0u8; 8];
/// let mut buf = Buffer::new(&mut scratch);
///
/// buf.write(View::from("short"));
/// assert!(!buf.is_owned());
///
/// buf.write(View::from(" and then longer"));
/// assert!(buf.is_owned());
/// assert_eq!(buf.contents(), "short and then longer");
/// ```
pub struct Buffer<'a> {
    /// Caller-supplied memory, used until the first growth.
    initial: &'a mut [u8],
    /// Owned storage after growth; its length is the capacity.
    heap: Option<Vec<u8>>,
    /// Bytes written, from the start of the active storage.
    len: usize,
}

impl Buffer<'static> {
    /// Create a buffer with a zero-length initial range.
    ///
    /// The first write allocates.
    #[must_use]
    pub fn empty() -> Self {
        Buffer::new(&mut [])
    }
}

impl<'a> Buffer<'a> {
    /// Create an empty buffer that writes into `initial` until it must grow.
    ///
    /// No allocation occurs. `initial` may be empty.
    #[must_use]
    pub fn new(initial: &'a mut [u8]) -> Self {
        Buffer {
            initial,
            heap: None,
            len: 0,
        }
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the size of the active storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage().len()
    }

    /// Returns the number of bytes that can be written without growing.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns true if the buffer has moved off its initial range onto an
    /// allocation of its own.
    #[inline]
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.heap.is_some()
    }

    fn storage(&self) -> &[u8] {
        match &self.heap {
            Some(heap) => heap.as_slice(),
            None => &*self.initial,
        }
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        match &mut self.heap {
            Some(heap) => heap.as_mut_slice(),
            None => &mut *self.initial,
        }
    }

    /// Returns a writer over the unwritten part of the active storage.
    fn spare(&mut self) -> ViewMut<'_> {
        let len = self.len;
        ViewMut::new(&mut self.storage_mut()[len..])
    }

    /// Ensure at least `additional` bytes can be written without growing.
    ///
    /// Growing copies the written bytes into a new allocation; the initial
    /// range is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the required size overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        if self.available() >= additional {
            return;
        }

        let Some(required) = self.len.checked_add(additional) else {
            panic!(
                "capacity overflow: {} bytes written, {additional} more requested",
                self.len
            );
        };
        let new_capacity = growth::grown_capacity(self.capacity(), required);

        trace!(
            old_capacity = self.capacity(),
            new_capacity,
            len = self.len,
            owned = self.is_owned(),
            "growing buffer"
        );

        if let Some(heap) = self.heap.as_mut() {
            heap.resize(new_capacity, 0);
        } else {
            let mut heap = Vec::with_capacity(new_capacity);
            heap.extend_from_slice(&self.initial[..self.len]);
            heap.resize(new_capacity, 0);
            self.heap = Some(heap);
        }
    }

    /// Append `src`, growing as needed. Returns `src.len()`.
    pub fn write(&mut self, src: View<'_>) -> usize {
        self.reserve(src.len());
        let written = self.spare().write(src);
        debug_assert_eq!(written, src.len());
        self.len += written;
        written
    }

    /// Append one byte, growing as needed. Always returns true.
    pub fn write_byte(&mut self, byte: u8) -> bool {
        self.reserve(1);
        let ok = self.spare().write_byte(byte);
        debug_assert!(ok);
        self.len += 1;
        ok
    }

    /// Append `count` copies of `byte`, growing as needed. Returns `count`.
    pub fn write_repeated(&mut self, byte: u8, count: usize) -> usize {
        self.reserve(count);
        let written = self.spare().write_repeated(byte, count);
        debug_assert_eq!(written, count);
        self.len += written;
        written
    }

    /// Append the UTF-8 encoding of `codepoint`.
    ///
    /// Values below `0x110000` are encoded in 1 to 4 bytes. Surrogate values
    /// are encoded like any other codepoint. Returns false, writing nothing,
    /// for values at or above `0x110000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsebuf::Buffer;
    ///
    /// let mut buf = Buffer::empty();
    /// assert!(buf.write_codepoint_utf8(0x20AC));
    /// assert_eq!(buf.contents(), "\u{20AC}");
    ///
    /// assert!(!buf.write_codepoint_utf8(0x11_0000));
    /// assert_eq!(buf.len(), 3);
    /// ```
    pub fn write_codepoint_utf8(&mut self, codepoint: u32) -> bool {
        self.try_write_codepoint_utf8(codepoint).is_ok()
    }

    /// Append the UTF-8 encoding of `codepoint`, returning its encoded length.
    pub fn try_write_codepoint_utf8(&mut self, codepoint: u32) -> Result<usize> {
        let (bytes, len) = encode_utf8(codepoint).ok_or(Error::InvalidCodepoint(codepoint))?;
        Ok(self.write(View::new(&bytes[..len])))
    }

    /// Append the UTF-8 encoding of `ch`, returning its encoded length.
    pub fn write_char(&mut self, ch: char) -> usize {
        let mut bytes = [0u8; 4];
        self.write(View::from(&*ch.encode_utf8(&mut bytes)))
    }

    /// Returns a view of exactly the bytes written so far.
    #[must_use]
    pub fn contents(&self) -> View<'_> {
        View::new(&self.storage()[..self.len])
    }

    /// Discard the written bytes, keeping the current storage.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Shrink an owned allocation to exactly the written length.
    ///
    /// Does nothing while the buffer is still on its initial range.
    pub fn trim(&mut self) {
        if let Some(heap) = &mut self.heap {
            trace!(
                old_capacity = heap.len(),
                new_capacity = self.len,
                "trimming buffer"
            );
            heap.truncate(self.len);
            heap.shrink_to_fit();
        }
    }

    /// Release any owned allocation and return to the initial range, empty.
    ///
    /// The buffer stays usable, and freeing again is harmless.
    pub fn free(&mut self) {
        if self.is_owned() {
            trace!(capacity = self.capacity(), "releasing buffer allocation");
        }
        self.heap = None;
        self.len = 0;
    }

    /// Consume the buffer, returning the written bytes as a vector.
    ///
    /// An owned allocation is reused; bytes still in the initial range are
    /// copied.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        match self.heap {
            Some(mut heap) => {
                heap.truncate(self.len);
                heap
            }
            None => self.initial[..self.len].to_vec(),
        }
    }
}

/// Encode `codepoint` as UTF-8 without rejecting surrogates.
fn encode_utf8(codepoint: u32) -> Option<([u8; 4], usize)> {
    let c = codepoint;
    let mut out = [0u8; 4];
    let len = if c < 0x80 {
        out[0] = c as u8;
        1
    } else if c < 0x800 {
        out[0] = 0xC0 | ((c >> 6) & 0x1F) as u8;
        out[1] = 0x80 | (c & 0x3F) as u8;
        2
    } else if c < 0x1_0000 {
        out[0] = 0xE0 | ((c >> 12) & 0x0F) as u8;
        out[1] = 0x80 | ((c >> 6) & 0x3F) as u8;
        out[2] = 0x80 | (c & 0x3F) as u8;
        3
    } else if c < CODEPOINT_LIMIT {
        out[0] = 0xF0 | ((c >> 18) & 0x07) as u8;
        out[1] = 0x80 | ((c >> 12) & 0x3F) as u8;
        out[2] = 0x80 | ((c >> 6) & 0x3F) as u8;
        out[3] = 0x80 | (c & 0x3F) as u8;
        4
    } else {
        return None;
    };
    Some((out, len))
}

impl Default for Buffer<'_> {
    fn default() -> Self {
        Buffer::new(&mut [])
    }
}

impl Sink for Buffer<'_> {
    fn write(&mut self, src: View<'_>) -> usize {
        Buffer::write(self, src)
    }

    fn write_repeated(&mut self, byte: u8, count: usize) -> usize {
        Buffer::write_repeated(self, byte, count)
    }

    fn write_byte(&mut self, byte: u8) -> bool {
        Buffer::write_byte(self, byte)
    }
}

impl std::fmt::Write for Buffer<'_> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        Buffer::write(self, View::from(s));
        Ok(())
    }
}

impl std::io::Write for Buffer<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(Buffer::write(self, View::new(buf)))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("owned", &self.is_owned())
            .field("contents", &self.contents())
            .finish()
    }
}
