//! Centralized configuration: code-point ranges, data-file labels, paths and limits.

/// **Rune alphabet:** the glyph blocks that make up the 512-character alphabet.
pub mod runes {
    use crate::runes::CodePointRange;

    /// Ranges enumerated by `gen-runes`, in output order.
    pub const RUNE_RANGES: &[CodePointRange] = &[
        CodePointRange::new("Braille Patterns", 0x2800, 0x28FF),
        CodePointRange::new("Box Drawing", 0x2500, 0x257F),
        CodePointRange::new("Block Elements", 0x2580, 0x259F),
        CodePointRange::new("Geometric Shapes", 0x25A0, 0x25FF),
    ];

    /// Number of glyphs produced by [`RUNE_RANGES`].
    pub const ALPHABET_SIZE: usize = 512;
}

/// **Emoji alphabet:** labels, limits and file locations for `gen-emoji-alphabet`.
pub mod emoji {
    /// Type label of a standalone emoji record (`Basic_Emoji`).
    pub const BASIC_EMOJI_LABEL: &str = "Basic_Emoji";
    /// Type label of a skin-tone modifier sequence (`RGI_Emoji_Modifier_Sequence`).
    pub const MODIFIER_SEQUENCE_LABEL: &str = "RGI_Emoji_Modifier_Sequence";

    /// Field separator of `emoji-sequences.txt`.
    pub const FIELD_SEPARATOR: char = ';';
    /// Marker of a comment line.
    pub const COMMENT_MARKER: char = '#';
    /// Separator of a code-point range field (e.g. `"231A..231B"`).
    pub const RANGE_SEPARATOR: &str = "..";

    /// Maximum number of emojis written to the alphabet file.
    pub const MAX_EMOJIS: usize = 1024;
    /// Number of emojis shown in the console preview.
    pub const PREVIEW_COUNT: usize = 20;
    /// Emojis per preview line.
    pub const PREVIEW_PER_LINE: usize = 10;

    /// Unicode 14.0 emoji-sequences data, relative to the crate root.
    pub const EMOJI_DATA_PATH: &str = "alphabet/emojis-14.0.txt";
    /// Generated alphabet, relative to the crate root.
    pub const EMOJI_ALPHABET_PATH: &str = "alphabet/alphabet.txt";
}
