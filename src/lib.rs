// src/lib.rs

pub mod cli;
pub mod params;

pub mod career;
pub mod merge;
pub mod resolve;
pub mod scan;
pub mod scrape;

pub mod net;
pub mod runner;
pub mod store;
