// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific knowledge: *where the ground truth lives in the HTML* and *how
//! to turn it into typed values*. The only page is the car listing; its spec is
//! [`cars`].
//!
//! ## What lives here
//! - Per-record field extraction through `core::html::CarBlock` accessors.
//! - Small pure parsers for compound strings (`"(1974, USA)"`, `"3,504"`,
//!   `"18.0 mpg"`, `"... 307.0 cubic inches ..."`).
//! - The field-level error type.
//!
//! ## What does **not** live here
//! - Fetching and caching (`core::net`, `store`).
//! - Iterating the page, failure policy, progress (`scrape`).
//! - Output formatting, including the `NULL` marker (`csv`).
//!
//! Specs should be testable offline against inline fixtures.
pub mod cars;
