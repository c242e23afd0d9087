//! Stream parameter extraction and player URL construction.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{StreamData, StreamParams};

/// Player invocation carried in the `onclick` of feed description anchors:
/// `show_webplayer('t', 'c', 'eid', 'lid', 'ci', 'si', 'lang')`.
static PLAYER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    let arg = r#"\s*['"]([^'"]*)['"]\s*"#;
    let args = vec![arg; 7].join(",");
    Regex::new(&format!(r"(?i)show_?web_?player\s*\({args}\)")).expect("static regex")
});

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[onclick]").expect("static selector"));

/// Parameters found in one description anchor, with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLink {
    pub label: String,
    pub params: StreamParams,
}

/// Read the player parameters from a stream link's query string.
///
/// A link that does not parse as an absolute URL yields the default bag.
pub fn params_from_url(link: &str) -> StreamParams {
    let mut params = StreamParams::default();
    match Url::parse(link) {
        Ok(url) => {
            for (key, value) in url.query_pairs() {
                params.set(&key, &value);
            }
        }
        Err(e) => log::debug!("Stream link {link:?} is not a URL: {e}"),
    }
    params
}

/// Parse a single `onclick` value into parameters.
pub fn params_from_player_call(onclick: &str) -> Option<StreamParams> {
    let caps = PLAYER_CALL.captures(onclick)?;
    let arg = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim());

    let mut params = StreamParams {
        stream_type: arg(1).to_string(),
        channel_id: arg(2).to_string(),
        event_id: arg(3).to_string(),
        link_id: arg(4).to_string(),
        category_id: arg(5).to_string(),
        source_index: arg(6).to_string(),
        ..StreamParams::default()
    };
    params.set("lang", arg(7));
    Some(params)
}

/// Find every anchor in a description whose `onclick` invokes the player.
pub fn player_links(description: &str) -> Vec<PlayerLink> {
    let fragment = Html::parse_fragment(description);
    fragment
        .select(&ANCHOR)
        .filter_map(|anchor| {
            let onclick = anchor.value().attr("onclick")?;
            let params = params_from_player_call(onclick)?;
            let label = anchor.text().collect::<String>().trim().to_string();
            Some(PlayerLink { label, params })
        })
        .collect()
}

/// Build the embeddable player URL for a parameter bag.
pub fn build_stream_url(player_url: &str, params: &StreamParams) -> Result<String> {
    let url = Url::parse_with_params(player_url, params.pairs())?;
    Ok(url.to_string())
}

/// Validate a parameter bag and build its player URL.
pub fn stream_data(player_url: &str, params: &StreamParams) -> Result<StreamData> {
    if params.channel_id.trim().is_empty() && params.event_id.trim().is_empty() {
        return Err(AppError::stream("neither channel id nor event id is set"));
    }
    Ok(StreamData {
        stream_url: build_stream_url(player_url, params)?,
    })
}
