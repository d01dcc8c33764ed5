// src/config/consts.rs

// Input
pub const DATA_FILE: &str = "scoutingForm.csv";
pub const FIRST_DATA_COLUMN: u16 = 5; // "Match" in the Google Form export

// Name lookup
pub const NAME_ENDPOINT: &str = "https://api.ftcscout.org/graphql";
pub const NAME_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("scout_viewer/", env!("CARGO_PKG_VERSION"));
pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_TEAM_FOUND: &str = "No team found";

// Field parsing
pub const OVERFLOW_SENTINEL: &str = "Too much";
pub const OVERFLOW_CEILING: u32 = 18;
pub const AUTO_PARK_YES: &str = "Yes";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// GUI
pub const WINDOW_TITLE: &str = "Team Data Viewer";
pub const UP_TO_DATE_MSG: &str = "Data is already up-to-date.";

// Leader highlight colors (RGB)
pub const BEST_AUTO_SAMPLES_COLOR: (u8, u8, u8) = (0xFF, 0xDD, 0xC1); // light red
pub const BEST_AUTO_SPECIMENS_COLOR: (u8, u8, u8) = (0xC1, 0xE1, 0xFF); // light blue
pub const BEST_TELEOP_SAMPLES_COLOR: (u8, u8, u8) = (0xC1, 0xFF, 0xC1); // light green
pub const BEST_TELEOP_SPECIMENS_COLOR: (u8, u8, u8) = (0xFF, 0xD1, 0xC1); // light pink
