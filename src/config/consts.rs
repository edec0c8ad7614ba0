// src/config/consts.rs

// Net config
pub const TEXT_URL_TEMPLATE: &str = "https://www.trismegistos.org/text/{id}";
pub const PLACE_URL_PREFIX: &str = "https://www.trismegistos.org/place/";
pub const USER_AGENT: &str = concat!("papyrus_scrape/", env!("CARGO_PKG_VERSION"));

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
pub const ID_PREFIX: &str = "TM";

// Missing values
pub const PLACEHOLDER: &str = "nan";
pub const MISSING_SPELLINGS: &[&str] = &["nan", "NaN", "NA", "N/A", "null", "None"];

// Local store (GUI log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const FAILURES_SUFFIX: &str = "failures";
pub const GENRES_FILE: &str = "genres.csv";
pub const CITIES_FILE: &str = "cities.csv";
pub const YEARS_FILE: &str = "years.csv";

// Explorer
pub const EXCERPT_CHARS: usize = 500;
pub const ALL_PROVENANCES: &str = "All";
