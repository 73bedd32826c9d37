// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "http://localhost:8000/home/m1049296/auto_mpg.html";
pub const USER_AGENT: &str = "auto_scrape/0.1";

// Local cache
pub const DEFAULT_CACHE_FILE: &str = "scraped_web_results.json";

// Scrape
pub const RECORD_SELECTOR: &str = "div.car_block";

// Export
pub const DEFAULT_OUT_FILE: &str = "scraped_cars.csv";
pub const NULL_CELL: &str = "NULL";

// Logging
pub const LOG_DIRECTIVE: &str = "info";
