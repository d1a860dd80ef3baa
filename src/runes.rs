use crate::config::runes::RUNE_RANGES;

/// An inclusive block of Unicode code points.
///
/// Ranges are curated by hand; a range whose `start` is greater than its `end`
/// is treated as empty rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    /// Unicode block name, used for logging.
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

impl CodePointRange {
    pub const fn new(name: &'static str, start: u32, end: u32) -> Self {
        Self { name, start, end }
    }

    /// Characters of the range in ascending order.
    ///
    /// Values that are not Unicode scalar values (surrogates, anything above
    /// U+10FFFF) are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        (self.start..=self.end).filter_map(char::from_u32)
    }

    /// Number of characters yielded by [`CodePointRange::chars`].
    pub fn len(&self) -> usize {
        self.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Concatenates every character of every range, in list order.
pub fn enumerate_ranges(ranges: &[CodePointRange]) -> String {
    let mut alphabet = String::new();
    for range in ranges {
        log::debug!(
            "{}: U+{:04X}..U+{:04X} -> {} glyphs",
            range.name,
            range.start,
            range.end,
            range.len()
        );
        alphabet.extend(range.chars());
    }
    alphabet
}

/// The rune alphabet built from the configured glyph blocks.
pub fn alphabet() -> String {
    enumerate_ranges(RUNE_RANGES)
}
