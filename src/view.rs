//! Non-owning references to byte ranges.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::ops::Deref;

/// A non-owning reference to a contiguous block of bytes.
///
/// The bytes need not be text: they are not null terminated and may hold
/// arbitrary values. A `View` never owns its memory; the lifetime `'a` ties
/// it to whatever does. Views are `Copy`, and every operation on them is
/// allocation-free.
///
/// The `consume_*` family shrinks the view from the front in place, which
/// makes a `View` usable directly as a parser cursor.
///
/// # Examples
///
/// ```
/// use parsebuf::View;
///
/// let mut input = View::from("   {\"key\": 1}");
/// input.consume_while(|b| b.is_ascii_whitespace());
/// assert!(input.consume_prefix(View::from("{")));
/// assert_eq!(input, "\"key\": 1}");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct View<'a> {
    data: &'a [u8],
}

impl View<'static> {
    /// Create a view of a string literal.
    ///
    /// No allocation occurs - the view points directly to static memory.
    #[must_use]
    pub const fn from_static(literal: &'static str) -> Self {
        View {
            data: literal.as_bytes(),
        }
    }
}

impl<'a> View<'a> {
    /// Create a view of a byte slice.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        View { data }
    }

    /// Create an empty view.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        View { data: &[] }
    }

    /// Returns the number of bytes in the view.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the view has length 0, wherever it points.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the viewed bytes with the full lifetime of the view.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    fn addr(&self) -> usize {
        self.data.as_ptr() as usize
    }

    // === Substrings ===

    /// Returns the offset of `child` relative to the start of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `child` does not start within `self` (the end of `self`
    /// counts as within). Measuring unrelated views is a logic error in the
    /// caller; use [`checked_substring_offset`](Self::checked_substring_offset)
    /// when the relationship is not known.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsebuf::View;
    ///
    /// let text = View::from("key=value");
    /// let mut rest = text;
    /// rest.consume_while(|b| b != b'=');
    /// assert_eq!(text.substring_offset(rest), 3);
    /// ```
    #[must_use]
    pub fn substring_offset(&self, child: View<'_>) -> usize {
        let offset = child.addr().wrapping_sub(self.addr());
        assert!(
            offset <= self.len(),
            "substring_offset: view is not inside its parent (relative address {}, parent len {})",
            offset as isize,
            self.len()
        );
        offset
    }

    /// Returns the offset of `child` relative to `self`, or an error if
    /// `child` does not start within `self`.
    pub fn checked_substring_offset(&self, child: View<'_>) -> Result<usize> {
        let offset = child.addr().wrapping_sub(self.addr());
        if offset <= self.len() {
            Ok(offset)
        } else {
            Err(Error::NotASubstring {
                offset: offset as isize,
                len: self.len(),
            })
        }
    }

    /// Returns the part of `self` before `child` begins.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as
    /// [`substring_offset`](Self::substring_offset).
    ///
    /// # Examples
    ///
    /// ```
    /// use parsebuf::View;
    ///
    /// let line = View::from("GET /index.html");
    /// let mut rest = line;
    /// rest.consume_while(|b| b.is_ascii_uppercase());
    /// assert_eq!(line.prefix_before(rest), "GET");
    /// ```
    #[must_use]
    pub fn prefix_before(&self, child: View<'_>) -> View<'a> {
        let offset = self.substring_offset(child);
        View::new(&self.data[..offset])
    }

    /// Returns the sub-range `[start, end)`, clamped into the view.
    ///
    /// The flag is true when exactly the requested range was returned. It is
    /// false when `end < start`, `start > len` or `end > len`; the view is
    /// then the overlap of the request with `self`, possibly empty, and is
    /// never out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsebuf::View;
    ///
    /// let v = View::from("0123456789");
    /// assert_eq!(v.slice(2, 5), (View::from("234"), true));
    ///
    /// let (clamped, exact) = v.slice(8, 20);
    /// assert_eq!(clamped, "89");
    /// assert!(!exact);
    /// ```
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> (View<'a>, bool) {
        let len = self.len();
        let mut start = start;
        let mut end = end;
        let mut exact = true;

        if end < start {
            end = start;
            exact = false;
        }
        if start > len {
            start = len;
            exact = false;
        }
        if end > len {
            end = len;
            exact = false;
        }

        (View::new(&self.data[start..end]), exact)
    }

    /// Returns exactly the sub-range `[start, end)`, or an error describing
    /// why it is not available.
    pub fn try_slice(&self, start: usize, end: usize) -> Result<View<'a>> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        if end > self.len() {
            return Err(Error::OutOfBounds {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(View::new(&self.data[start..end]))
    }

    // === Comparison ===

    /// Compare two views byte-wise.
    ///
    /// The common prefix is compared first; if it is equal the shorter view
    /// orders first.
    #[must_use]
    pub fn compare(&self, other: View<'_>) -> Ordering {
        let common = self.len().min(other.len());
        match self.data[..common].cmp(&other.data[..common]) {
            Ordering::Equal => self.len().cmp(&other.len()),
            ordering => ordering,
        }
    }

    /// Returns true if the view begins with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: View<'_>) -> bool {
        self.data.starts_with(prefix.data)
    }

    // === Read ===

    /// Returns the first byte, or `None` for an empty view.
    #[inline]
    #[must_use]
    pub fn first_byte(&self) -> Option<u8> {
        self.data.first().copied()
    }

    /// Remove up to `n` bytes from the front of the view.
    ///
    /// Returns the number of bytes removed, which is less than `n` when the
    /// view is shorter.
    pub fn consume(&mut self, n: usize) -> usize {
        let size = n.min(self.len());
        self.data = &self.data[size..];
        size
    }

    /// Remove the first byte if it satisfies `predicate`.
    ///
    /// Returns the removed byte. The view is left unchanged when it is empty
    /// or the byte does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsebuf::View;
    ///
    /// let mut input = View::from("7a");
    /// assert_eq!(input.consume_matching(|b| b.is_ascii_digit()), Some(b'7'));
    /// assert_eq!(input.consume_matching(|b| b.is_ascii_digit()), None);
    /// assert_eq!(input, "a");
    /// ```
    pub fn consume_matching<F>(&mut self, predicate: F) -> Option<u8>
    where
        F: FnOnce(u8) -> bool,
    {
        let byte = self.first_byte()?;
        if predicate(byte) {
            self.consume(1);
            Some(byte)
        } else {
            None
        }
    }

    /// Remove bytes from the front while they satisfy `predicate`.
    ///
    /// Returns the number of bytes removed.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let mut count = 0;
        while self.consume_matching(&mut predicate).is_some() {
            count += 1;
        }
        count
    }

    /// Remove `prefix` from the front of the view if it is there.
    ///
    /// Returns whether the prefix matched. On a mismatch the view is left
    /// unchanged.
    pub fn consume_prefix(&mut self, prefix: View<'_>) -> bool {
        let (head, exact) = self.slice(0, prefix.len());
        let matched = exact && head.compare(prefix) == Ordering::Equal;
        if matched {
            self.consume(prefix.len());
        }
        matched
    }
}

impl Ord for View<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl PartialOrd for View<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Deref for View<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.data
    }
}

impl AsRef<[u8]> for View<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> From<&'a [u8]> for View<'a> {
    fn from(data: &'a [u8]) -> Self {
        View::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for View<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        View::new(data)
    }
}

impl<'a> From<&'a str> for View<'a> {
    fn from(s: &'a str) -> Self {
        View::new(s.as_bytes())
    }
}

impl std::fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View(b\"{}\")", self.data.escape_ascii())
    }
}

impl PartialEq<[u8]> for View<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.data == other
    }
}

impl PartialEq<&[u8]> for View<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.data == *other
    }
}

impl PartialEq<&str> for View<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}
