// src/scrape/mod.rs
//! Page-specific extraction.
//!
//! Each submodule owns one page kind and encodes where the ground truth
//! lives in its markup: `index` reads the per-letter player indexes,
//! `seasons` reads one league-year totals table, `profile` reads one
//! player's college profile. All three work on a one-shot line sequence,
//! match literal needles only, and degrade to absent fields on any
//! mismatch. Fetching lives in `net`, persistence in `store`.

pub mod index;
pub mod profile;
pub mod seasons;
