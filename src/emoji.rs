use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::config::emoji::{
    BASIC_EMOJI_LABEL, COMMENT_MARKER, FIELD_SEPARATOR, MAX_EMOJIS, MODIFIER_SEQUENCE_LABEL,
    RANGE_SEPARATOR,
};

/// Record types of `emoji-sequences.txt` that the extractor acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// A standalone emoji (`Basic_Emoji`)
    BasicEmoji,
    /// A base followed by a skin-tone modifier (`RGI_Emoji_Modifier_Sequence`)
    ModifierSequence,
}

impl SequenceKind {
    /// Label used in the type field of the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceKind::BasicEmoji => BASIC_EMOJI_LABEL,
            SequenceKind::ModifierSequence => MODIFIER_SEQUENCE_LABEL,
        }
    }

    /// Parse a type field; any other label yields `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            BASIC_EMOJI_LABEL => Some(SequenceKind::BasicEmoji),
            MODIFIER_SEQUENCE_LABEL => Some(SequenceKind::ModifierSequence),
            _ => None,
        }
    }

    /// Only the base code point of a modifier sequence is kept
    pub fn is_modifier_base(&self) -> bool {
        matches!(self, SequenceKind::ModifierSequence)
    }
}

/// The two fields of a data line the extractor looks at, already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
    pub code_points: &'a str,
    pub type_field: &'a str,
}

/// A classified data line and the emoji strings parsed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: SequenceKind,
    pub sequences: Vec<String>,
}

/// A data line that was skipped because its code points could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    pub reason: String,
}

/// Everything collected from one pass over the data file.
#[derive(Debug, Default)]
pub struct EmojiSets {
    pub basic: BTreeSet<String>,
    pub modifier_bases: BTreeSet<String>,
    pub malformed: Vec<MalformedLine>,
}

impl EmojiSets {
    pub fn insert(&mut self, record: Record) {
        let target = match record.kind {
            SequenceKind::BasicEmoji => &mut self.basic,
            SequenceKind::ModifierSequence => &mut self.modifier_bases,
        };
        target.extend(record.sequences);
    }

    /// Basic emojis that are not modifier bases, ordered by the code point of
    /// their first character and cut to `limit` entries.
    ///
    /// Entries sharing a first code point keep the set's lexicographic order,
    /// so the result is the same on every run.
    pub fn filtered(&self, limit: usize) -> Vec<String> {
        let mut filtered: Vec<String> = self
            .basic
            .difference(&self.modifier_bases)
            .cloned()
            .collect();
        filtered.sort_by_key(|emoji| emoji.chars().next().map_or(0, u32::from));
        filtered.truncate(limit);
        filtered
    }
}

/// Result of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The input file does not exist; nothing was written.
    MissingInput(PathBuf),
    Written(ExtractSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub output: PathBuf,
    /// Entries written, in file order
    pub emojis: Vec<String>,
    pub basic_count: usize,
    pub modifier_base_count: usize,
    pub malformed_lines: usize,
}

/// Splits a data line into its code-point and type fields.
///
/// Returns `None` for blank lines, comments and lines with fewer than two
/// `;`-separated fields.
pub fn split_data_line(line: &str) -> Option<DataLine<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let code_points = fields.next()?.trim();
    let type_field = fields.next()?.trim();
    Some(DataLine {
        code_points,
        type_field,
    })
}

fn parse_code_point(token: &str) -> Result<char> {
    let token = token.trim();
    let value = u32::from_str_radix(token, 16)
        .with_context(|| format!("invalid hex code point {:?}", token))?;
    char::from_u32(value).ok_or_else(|| anyhow!("U+{:04X} is not a Unicode scalar value", value))
}

/// Parses a code-point field into emoji strings.
///
/// * `"231A..231B"` yields one single-character string per code point.
/// * `"1F1E6 1F1E7"` yields one string holding the whole sequence.
/// * With `is_modifier_base` only the first code point of a sequence is kept.
///
/// A field without any code point yields an empty list.
pub fn parse_code_points(field: &str, is_modifier_base: bool) -> Result<Vec<String>> {
    if let Some((start, end)) = field.split_once(RANGE_SEPARATOR) {
        let start = u32::from(parse_code_point(start)?);
        let end = u32::from(parse_code_point(end)?);
        return (start..=end)
            .map(|value| {
                char::from_u32(value)
                    .map(String::from)
                    .ok_or_else(|| anyhow!("U+{:04X} is not a Unicode scalar value", value))
            })
            .collect();
    }

    let mut tokens = field.split_whitespace();
    if is_modifier_base {
        return match tokens.next() {
            Some(token) => Ok(vec![parse_code_point(token)?.to_string()]),
            None => Ok(Vec::new()),
        };
    }

    let sequence = tokens.map(parse_code_point).collect::<Result<String>>()?;
    if sequence.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![sequence])
}

/// Classifies one line of the data file.
///
/// `Ok(None)` covers every line the extractor ignores: blanks, comments,
/// structurally invalid lines and unrelated type labels.
pub fn parse_line(line: &str) -> Result<Option<Record>> {
    let Some(data) = split_data_line(line) else {
        return Ok(None);
    };
    let Some(kind) = SequenceKind::from_label(data.type_field) else {
        return Ok(None);
    };

    let sequences = parse_code_points(data.code_points, kind.is_modifier_base())
        .with_context(|| format!("Could not parse code points '{}'", data.code_points))?;
    Ok(Some(Record { kind, sequences }))
}

/// Folds every line of `reader` into basic and modifier-base sets.
///
/// Malformed lines are logged, recorded and skipped. Read errors abort.
pub fn extract_emojis<R: BufRead>(reader: R) -> Result<EmojiSets> {
    let mut sets = EmojiSets::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_number))?;

        match parse_line(&line) {
            Ok(Some(record)) => sets.insert(record),
            Ok(None) => {}
            Err(e) => {
                log::warn!("Line {}: {:#}", line_number, e);
                sets.malformed.push(MalformedLine {
                    line_number,
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    Ok(sets)
}

/// Writes one entry per line, UTF-8 encoded.
pub fn write_alphabet(path: &Path, emojis: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    for emoji in emojis {
        writeln!(writer, "{}", emoji)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}

/// The first `count` entries, `per_line` to a line, separated by spaces.
pub fn preview_lines(emojis: &[String], count: usize, per_line: usize) -> Vec<String> {
    emojis[..count.min(emojis.len())]
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Reads the emoji data at `input` and writes the filtered alphabet to `output`.
///
/// A missing input is reported and returned as [`ExtractOutcome::MissingInput`]
/// without touching `output`.
pub fn run(input: &Path, output: &Path) -> Result<ExtractOutcome> {
    if !input.exists() {
        log::error!("Input file '{}' not found", input.display());
        return Ok(ExtractOutcome::MissingInput(input.to_path_buf()));
    }

    log::info!("Processing emoji data from '{}'...", input.display());
    let file = File::open(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    let sets = extract_emojis(BufReader::new(file))?;
    log::info!(
        "Collected {} basic emojis and {} modifier bases ({} malformed lines skipped)",
        sets.basic.len(),
        sets.modifier_bases.len(),
        sets.malformed.len()
    );

    let emojis = sets.filtered(MAX_EMOJIS);
    write_alphabet(output, &emojis)?;
    log::info!("Output written to '{}'", output.display());

    Ok(ExtractOutcome::Written(ExtractSummary {
        output: output.to_path_buf(),
        emojis,
        basic_count: sets.basic.len(),
        modifier_base_count: sets.modifier_bases.len(),
        malformed_lines: sets.malformed.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sequence_kind_labels() {
        assert_eq!(SequenceKind::BasicEmoji.as_str(), "Basic_Emoji");
        assert_eq!(SequenceKind::ModifierSequence.as_str(), "RGI_Emoji_Modifier_Sequence");

        assert_eq!(SequenceKind::from_label("Basic_Emoji"), Some(SequenceKind::BasicEmoji));
        assert_eq!(
            SequenceKind::from_label("RGI_Emoji_Modifier_Sequence"),
            Some(SequenceKind::ModifierSequence)
        );
        assert_eq!(SequenceKind::from_label("RGI_Emoji_Flag_Sequence"), None);
        assert_eq!(SequenceKind::from_label("basic_emoji"), None);
    }

    #[test]
    fn test_split_data_line() {
        let line = "231A..231B    ; Basic_Emoji                  ; watch     # E0.6   [2] (⌚..⌛)";
        assert_eq!(
            split_data_line(line),
            Some(DataLine {
                code_points: "231A..231B",
                type_field: "Basic_Emoji",
            })
        );

        assert_eq!(split_data_line(""), None);
        assert_eq!(split_data_line("   "), None);
        assert_eq!(split_data_line("# Basic_Emoji"), None);
        assert_eq!(split_data_line("   # 1F600 ; Basic_Emoji"), None);
        assert_eq!(split_data_line("1F600 Basic_Emoji"), None);
    }

    #[test]
    fn test_sequence_is_one_grapheme() {
        let parsed = parse_code_points("1F1E6 1F1E7", false).unwrap();
        assert_eq!(parsed, vec!["\u{1F1E6}\u{1F1E7}".to_string()]);
    }

    #[test]
    fn test_range_field() {
        let parsed = parse_code_points("0023..0024", false).unwrap();
        assert_eq!(parsed, vec!["#".to_string(), "$".to_string()]);
    }

    #[test]
    fn test_reversed_range_field_is_empty() {
        assert!(parse_code_points("0024..0023", false).unwrap().is_empty());
    }

    #[test]
    fn test_modifier_base_keeps_first_code_point() {
        let parsed = parse_code_points("261D 1F3FB", true).unwrap();
        assert_eq!(parsed, vec!["\u{261D}".to_string()]);
    }

    #[test]
    fn test_empty_field() {
        assert!(parse_code_points("", false).unwrap().is_empty());
        assert!(parse_code_points("  ", true).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(parse_code_points("ZZZZ", false).is_err());
        assert!(parse_code_points("1F600 ZZZZ", false).is_err());
        assert!(parse_code_points("ZZZZ..1F600", false).is_err());
        assert!(parse_code_points("1F600..1F601..1F602", false).is_err());
        // Surrogates and values past U+10FFFF are not characters.
        assert!(parse_code_points("D800", false).is_err());
        assert!(parse_code_points("110000", true).is_err());
    }

    #[test]
    fn test_parse_line_ignores_other_labels() {
        let line = "1F1E6 1F1E8   ; RGI_Emoji_Flag_Sequence      ; flag: Ascension Island";
        assert_eq!(parse_line(line).unwrap(), None);
        // Unrelated labels are not parsed at all.
        assert_eq!(parse_line("ZZZZ ; Emoji_Keycap_Sequence ; bogus").unwrap(), None);
    }

    #[test]
    fn test_parse_line_reports_field() {
        let err = parse_line("ZZZZ ; Basic_Emoji ; bogus").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("'ZZZZ'"), "unexpected message: {}", message);
    }

    #[test]
    fn test_extract_skips_malformed_lines() {
        let data = "\
# comment
1F600 ; Basic_Emoji ; grinning face

ZZZZ ; Basic_Emoji ; bogus
only one field
1F601 ; Basic_Emoji ; beaming face
";
        let sets = extract_emojis(Cursor::new(data)).unwrap();
        assert_eq!(sets.basic.len(), 2);
        assert!(sets.basic.contains("\u{1F600}"));
        assert!(sets.basic.contains("\u{1F601}"));
        assert_eq!(sets.malformed.len(), 1);
        assert_eq!(sets.malformed[0].line_number, 4);
        assert!(sets.malformed[0].reason.contains("ZZZZ"));
    }

    #[test]
    fn test_filtered_subtracts_sorts_and_truncates() {
        let mut sets = EmojiSets::default();
        sets.insert(Record {
            kind: SequenceKind::BasicEmoji,
            sequences: vec![
                "\u{1F44B}".to_string(),
                "\u{00A9}\u{FE0F}".to_string(),
                "\u{270A}".to_string(),
                "\u{231A}".to_string(),
            ],
        });
        sets.insert(Record {
            kind: SequenceKind::ModifierSequence,
            sequences: vec!["\u{270A}".to_string()],
        });

        assert_eq!(
            sets.filtered(10),
            vec![
                "\u{00A9}\u{FE0F}".to_string(),
                "\u{231A}".to_string(),
                "\u{1F44B}".to_string(),
            ]
        );
        assert_eq!(sets.filtered(2).len(), 2);
        assert!(sets.filtered(0).is_empty());
    }

    #[test]
    fn test_preview_lines() {
        let emojis: Vec<String> = ('a'..='z').map(String::from).collect();
        let preview = preview_lines(&emojis, 20, 10);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0], "a b c d e f g h i j");
        assert_eq!(preview[1], "k l m n o p q r s t");

        let short = preview_lines(&emojis[..3], 20, 10);
        assert_eq!(short, vec!["a b c".to_string()]);
        assert!(preview_lines(&[], 20, 10).is_empty());
    }
}
