use std::sync::OnceLock;

use regex::Regex;

pub const COUNTRY_CODE: &str = "+91";
pub const PHONE_DIGITS: usize = 10;

/// Digits in the first group of a formatted number.
const PHONE_GROUP: usize = 5;

fn name_filter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z\s]").unwrap())
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn formatted_phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+91\s[0-9]{5}\s[0-9]{5}$").unwrap())
}

/// Drops everything but ASCII letters and whitespace.
pub fn filter_name(raw: &str) -> String {
    name_filter().replace_all(raw, "").into_owned()
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// True for `+91 DDDDD DDDDD`, the only shape the backend accepts.
pub fn is_formatted_phone(value: &str) -> bool {
    formatted_phone_pattern().is_match(value)
}

/// Subscriber digits typed so far. A leading `+91` belongs to the mask and
/// is skipped, so re-reading a masked value yields the same digits.
pub fn phone_digits(value: &str) -> String {
    let trimmed = value.trim_start();
    let rest = trimmed.strip_prefix(COUNTRY_CODE).unwrap_or(trimmed);
    rest.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Live phone mask: at most ten digits, grouped once six are present.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = phone_digits(raw).chars().take(PHONE_DIGITS).collect();
    if digits.len() <= PHONE_GROUP {
        format!("{} {}", COUNTRY_CODE, digits)
    } else {
        let (first, rest) = digits.split_at(PHONE_GROUP);
        format!("{} {} {}", COUNTRY_CODE, first, rest)
    }
}

/// Final submission format. Returns `None` unless exactly ten digits are given.
pub fn format_phone(digits: &str) -> Option<String> {
    if digits.len() != PHONE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (first, rest) = digits.split_at(PHONE_GROUP);
    Some(format!("{} {} {}", COUNTRY_CODE, first, rest))
}

/// Head count from a party-size label such as `"2-4"` or `"1 Person"`.
/// A leading `+` is allowed. Zero, a label without a leading number, or a
/// count too large for `u32` counts as no selection.
pub fn parse_persons(label: &str) -> Option<u32> {
    let head = label.split('-').next().unwrap_or_default().trim();
    let head = head.strip_prefix('+').unwrap_or(head);
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok().filter(|n| *n > 0)
}
