// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use chart_core::{load_reader, Dataset, LoadOptions, Record};
use chrono::NaiveDate;

pub fn rec(platform: &str, post_type: &str, date: &str, likes: u64) -> Record {
    Record {
        platform: platform.to_string(),
        post_type: post_type.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        date_label: date.to_string(),
        likes,
    }
}

/// Two platforms, two post types, three dates; rows deliberately out of date order.
pub const SMALL_CSV: &str = "Platform,PostType,Date,Likes
A,Image,2024-03-03,40
A,Image,2024-03-01,10
A,Video,2024-03-01,30
B,Image,2024-03-02,20
A,Image,2024-03-02,50
";

pub fn small_dataset() -> Dataset {
    load_reader(SMALL_CSV.as_bytes(), &LoadOptions::default()).expect("fixture loads")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
