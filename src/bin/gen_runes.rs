use dotenv::*;
use glyph_alphabets::runes;

fn main() {
    dotenv().ok();
    glyph_alphabets::init_logging();

    let alphabet = runes::alphabet();
    log::info!("Generated {} glyphs", alphabet.chars().count());
    println!("{}", alphabet);
}
