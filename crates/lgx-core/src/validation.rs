//! Client-side field validation.
//!
//! Indian registration plates, mobile numbers, and postal codes are checked
//! with anchored regexes before a draft is submitted. Inputs are trimmed;
//! vehicle numbers are also normalized (uppercase, no spaces or hyphens)
//! because operators type them in many shapes.

use std::sync::LazyLock;

use regex::Regex;

static VEHICLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{4}$").expect("vehicle number regex")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone regex"));

static PINCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode regex"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

static GST_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("gst regex")
});

/// Uppercase and strip separators: `mh 12-ab 1234` → `MH12AB1234`.
#[must_use]
pub fn normalize_vehicle_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[must_use]
pub fn is_valid_vehicle_number(raw: &str) -> bool {
    VEHICLE_NUMBER.is_match(&normalize_vehicle_number(raw))
}

#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE.is_match(raw.trim())
}

#[must_use]
pub fn is_valid_pincode(raw: &str) -> bool {
    PINCODE.is_match(raw.trim())
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL.is_match(raw.trim())
}

#[must_use]
pub fn is_valid_gst_number(raw: &str) -> bool {
    GST_NUMBER.is_match(&raw.trim().to_ascii_uppercase())
}
