//! Internal primitives shared by the extraction functions.
//!
//! This module is `pub(crate)` so that [`crate::extract`] and future
//! sibling modules can share the same low-level routines without exposing
//! them as part of the public API.

use chrono::DateTime;
use scraper::{ElementRef, Selector};
use url::Url;

/// Concatenated, trimmed text content of an element.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// `href` of an anchor element, resolved against the page URL.
///
/// Listing markup uses relative links (`/p/abc123`); resolving against the
/// navigated URL reproduces the absolute form the platform links to.
/// Returns `None` when the attribute is absent or unjoinable — such an
/// element carries no usable identity.
pub(crate) fn resolve_href(el: ElementRef<'_>, base: &Url) -> Option<String> {
    let href = el.value().attr("href")?;
    base.join(href).ok().map(Into::into)
}

/// Counter value rendered after an icon marker, 0 when never rendered.
///
/// Counters are not structured fields: the number lives in the text node
/// immediately following the icon element, e.g.
/// `<i class="ic-list-like"></i> 12`. A missing icon, a missing adjacent
/// text node, or text without a leading integer all read as 0.
pub(crate) fn icon_count(scope: ElementRef<'_>, icon: &Selector) -> u64 {
    scope
        .select(icon)
        .next()
        .and_then(|ic| ic.next_sibling())
        .and_then(|node| node.value().as_text())
        .and_then(|text| leading_count(text))
        .unwrap_or(0)
}

/// Parses the integer at the start of `text`, ignoring leading whitespace.
///
/// Trailing non-digits are allowed (`" 12 people"` parses as 12), matching
/// how the counters render with surrounding whitespace and labels.
pub(crate) fn leading_count(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    let digits: &str = {
        let end = trimmed
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };
    digits.parse::<u64>().ok()
}

/// Formats an RFC 3339 publish timestamp to minute granularity.
///
/// The platform stores the value in a `data-shared-at` attribute like
/// `2019-05-01T12:30:45+08:00`; the reports carry `2019-05-01 12:30`, in
/// the timestamp's own offset. Unparseable input is treated like an
/// absent attribute.
pub(crate) fn format_publish_time(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_count_plain_integer() {
        assert_eq!(leading_count("12"), Some(12));
    }

    #[test]
    fn leading_count_skips_leading_whitespace() {
        assert_eq!(leading_count("\n  42"), Some(42));
    }

    #[test]
    fn leading_count_ignores_trailing_text() {
        assert_eq!(leading_count(" 7 people"), Some(7));
    }

    #[test]
    fn leading_count_empty_returns_none() {
        assert!(leading_count("").is_none());
    }

    #[test]
    fn leading_count_no_digits_returns_none() {
        assert!(leading_count("like").is_none());
    }

    #[test]
    fn leading_count_digits_after_text_returns_none() {
        assert!(leading_count("about 3").is_none());
    }

    #[test]
    fn format_publish_time_keeps_the_timestamps_offset() {
        assert_eq!(
            format_publish_time("2019-05-01T12:30:45+08:00").as_deref(),
            Some("2019-05-01 12:30")
        );
    }

    #[test]
    fn format_publish_time_utc() {
        assert_eq!(
            format_publish_time("2020-12-31T23:59:59Z").as_deref(),
            Some("2020-12-31 23:59")
        );
    }

    #[test]
    fn format_publish_time_garbage_returns_none() {
        assert!(format_publish_time("yesterday").is_none());
    }
}
