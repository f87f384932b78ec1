// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REFERER: &str = "https://www.amazon.com/";
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Review markup
pub const STAR_MARKER: &str = "out of 5 stars";
pub const DATE_PREFIX: &str = "Reviewed in India on ";

// Table
pub const MISSING: &str = "N/A";
pub const SEPARATOR_CELL: &str = "-";
pub const SENTIMENT_COLUMN: &str = "Sentiment";
pub const REVIEW_HEADERS: [&str; 5] = ["Name", "Date", "Star_Rating", "Short_Review", "Long_Review"];

// Sheets
pub const SHEET_HOST: &str = "docs.google.com/spreadsheets";
pub const SHEET_SHARE_SUFFIX: &str = "/edit?usp=sharing";
pub const SHEET_EXPORT_SUFFIX: &str = "/export?format=csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXTRACTED_FILE: &str = "Amazon_Extracted_Data";
pub const RESULTS_FILE: &str = "Sentiment_Analysis_Results";

// Logging
pub const LOG_DIR: &str = ".revscope";
pub const LOG_FILE: &str = "debug.log";
