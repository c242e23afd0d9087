// src/utils/url.rs

//! URL manipulation utilities.

use url::form_urlencoded;

/// Route `target` through a relay that returns the resource verbatim.
///
/// The target is percent-encoded and appended to the relay prefix.
///
/// # Examples
/// ```
/// use sportfeed::utils::url::relay_url;
///
/// assert_eq!(
///     relay_url("https://relay.example.com/raw?url=", "https://feed.example.com/a.xml?x=1"),
///     "https://relay.example.com/raw?url=https%3A%2F%2Ffeed.example.com%2Fa.xml%3Fx%3D1"
/// );
/// ```
pub fn relay_url(relay: &str, target: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{relay}{encoded}")
}

/// Extract domain from a URL, for log lines.
pub fn get_domain(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed.host_str().map(str::to_lowercase)
}
