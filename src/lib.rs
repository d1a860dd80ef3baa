pub mod config;
pub mod emoji;
pub mod runes;

/// Initialise `pretty_env_logger` at `info`, letting `RUST_LOG` override the filter.
pub fn init_logging() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
