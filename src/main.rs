use anyhow::Result;
use dotenv::*;
use std::path::Path;

use glyph_alphabets::config::emoji::{
    EMOJI_ALPHABET_PATH, EMOJI_DATA_PATH, PREVIEW_COUNT, PREVIEW_PER_LINE,
};
use glyph_alphabets::emoji::{self, ExtractOutcome};

fn main() -> Result<()> {
    dotenv().ok();
    glyph_alphabets::init_logging();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input = root.join(EMOJI_DATA_PATH);
    let output = root.join(EMOJI_ALPHABET_PATH);

    // A missing input has already been reported; there is nothing left to do.
    let ExtractOutcome::Written(summary) = emoji::run(&input, &output)? else {
        return Ok(());
    };

    println!(
        "Successfully extracted {} unique Basic_Emoji characters (after filtering)",
        summary.emojis.len()
    );
    println!("Output written to '{}'", summary.output.display());

    println!("\nFirst {} emojis:", PREVIEW_COUNT);
    for line in emoji::preview_lines(&summary.emojis, PREVIEW_COUNT, PREVIEW_PER_LINE) {
        println!("{}", line);
    }
    println!("...");

    Ok(())
}
