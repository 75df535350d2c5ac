use memchr::memchr;

/// Splits a string on a single-byte ASCII delimiter, yielding every segment (including empty
/// ones, so `a..b` yields `a`, ``, `b`).
pub(crate) struct MemchrSplitter<'a> {
    haystack: &'a str,
    delimiter: u8,
    offset: Option<usize>,
}

impl<'a> MemchrSplitter<'a> {
    pub(crate) fn split(haystack: &'a str, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii());
        MemchrSplitter {
            haystack,
            delimiter,
            offset: Some(0),
        }
    }
}

impl<'a> Iterator for MemchrSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset?;
        let rest = &self.haystack[offset..];

        if let Some(index) = memchr(self.delimiter, rest.as_bytes()) {
            // The delimiter is ASCII, so `index` is always a character boundary.
            self.offset = Some(offset + index + 1);
            Some(&rest[..index])
        } else {
            self.offset = None;
            Some(rest)
        }
    }
}
