//! Plain-text helpers shared by the engines.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

/// Strip HTML tags and decode common entities from rich-text content.
///
/// Tags are removed without inserting whitespace, so `<p>a</p><p>b</p>`
/// becomes `ab`. Entities are decoded after tags are removed, which keeps
/// escaped angle brackets as literal text. Unknown named entities are left
/// untouched.
pub fn plain_text(html: &str) -> Cow<'_, str> {
    if !html.contains('<') && !html.contains('&') {
        return Cow::Borrowed(html);
    }
    let stripped = TAG.replace_all(html, "");
    let decoded = ENTITY.replace_all(&stripped, |caps: &Captures<'_>| decode_entity(&caps[0], &caps[1]));
    Cow::Owned(decoded.into_owned())
}

fn decode_entity(whole: &str, body: &str) -> String {
    let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match body {
            "nbsp" => Some(' '),
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "ndash" => Some('\u{2013}'),
            "mdash" => Some('\u{2014}'),
            "hellip" => Some('\u{2026}'),
            _ => None,
        }
    };
    match decoded {
        Some(c) => c.to_string(),
        None => whole.to_string(),
    }
}

/// Lowercase and trim a value for case-insensitive comparison.
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive equality after trimming both sides.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Case-insensitive substring test. `needle` must already be folded.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
