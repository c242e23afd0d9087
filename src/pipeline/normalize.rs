//! Raw candidate to canonical match conversion.

use chrono::{DateTime, Utc};

use crate::extract::{
    build_stream_url, classify, classify_logo, extract_league, extract_teams, params_from_url,
    player_links, slugify,
};
use crate::models::{DEFAULT_LEAGUE, Match, Sport, StreamSource};
use crate::parse::{FeedItem, ListingItem, RawCandidate};

/// Marquee sports on the listing path.
const LISTING_POPULAR: &[Sport] = &[
    Sport::Football,
    Sport::Basketball,
    Sport::Baseball,
    Sport::Soccer,
    Sport::Tennis,
];

/// Marquee sports on the feed path. Tennis is not one of them.
const FEED_POPULAR: &[Sport] = &[
    Sport::Football,
    Sport::Basketball,
    Sport::Baseball,
    Sport::Soccer,
];

/// Turns raw candidates into [`Match`] values.
#[derive(Debug, Clone)]
pub struct Normalizer {
    player_url: String,
}

impl Normalizer {
    /// `player_url` is the web player endpoint used for feed stream embeds.
    pub fn new(player_url: impl Into<String>) -> Self {
        Self {
            player_url: player_url.into(),
        }
    }

    pub fn normalize(&self, candidate: RawCandidate, now: DateTime<Utc>) -> Match {
        match candidate {
            RawCandidate::Listing(item) => self.from_listing(item),
            RawCandidate::Feed(item) => self.from_feed(item, now),
        }
    }

    pub fn normalize_all(&self, candidates: Vec<RawCandidate>, now: DateTime<Utc>) -> Vec<Match> {
        candidates
            .into_iter()
            .map(|candidate| self.normalize(candidate, now))
            .collect()
    }

    fn from_listing(&self, item: ListingItem) -> Match {
        let id = format!("mobile-{}", item.index);

        let mut category = item.category.as_deref().map_or(Sport::Other, classify);
        if category == Sport::Other {
            if let Some(logo) = &item.logo {
                category = classify_logo(logo);
            }
        }

        let sources = vec![StreamSource {
            id: format!("{id}-0"),
            name: "Stream 1".to_string(),
            stream_params: Some(params_from_url(&item.link)),
            embed: item.link,
        }];

        Match {
            slug: slug_or_id(&item.title, &id),
            teams: extract_teams(&item.title),
            league: item.category.unwrap_or_else(|| DEFAULT_LEAGUE.to_string()),
            popular: LISTING_POPULAR.contains(&category),
            category,
            live: item.live,
            date: item.date,
            title: item.title,
            sources,
            id,
        }
    }

    fn from_feed(&self, item: FeedItem, now: DateTime<Utc>) -> Match {
        let id = format!("rss-{}", item.index);
        let text = format!("{} {}", item.title, item.description);
        let category = classify(&text);

        let mut sources: Vec<StreamSource> = player_links(&item.description)
            .into_iter()
            .filter_map(|link| {
                let embed = match build_stream_url(&self.player_url, &link.params) {
                    Ok(url) => url,
                    Err(e) => {
                        log::debug!("Skipping stream for {id}: {e}");
                        return None;
                    }
                };
                Some((embed, link))
            })
            .enumerate()
            .map(|(n, (embed, link))| StreamSource {
                id: format!("{id}-{n}"),
                name: if link.label.is_empty() {
                    format!("Stream {}", n + 1)
                } else {
                    link.label
                },
                embed,
                stream_params: Some(link.params),
            })
            .collect();

        if sources.is_empty() {
            sources.push(StreamSource {
                id: format!("{id}-link"),
                name: "Event Page".to_string(),
                embed: item.link.clone(),
                stream_params: None,
            });
        }

        Match {
            slug: slug_or_id(&item.title, &id),
            teams: extract_teams(&item.title),
            league: extract_league(&text),
            popular: FEED_POPULAR.contains(&category),
            category,
            live: item.live,
            date: item.published.unwrap_or(now),
            title: item.title,
            sources,
            id,
        }
    }
}

/// Slug of the title, or of the id when the title has no usable characters.
fn slug_or_id(title: &str, id: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() { slugify(id) } else { slug }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    const PLAYER: &str = "https://player.example.com/webplayer.php";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 20, 0, 0).unwrap()
    }

    fn listing_item() -> ListingItem {
        ListingItem {
            index: 4,
            title: "Lakers vs Celtics".to_string(),
            link: "https://m.example.com/webplayer.php?t=ifr&c=12&eid=345".to_string(),
            note: "17 October at 19:30 (Basketball. NBA) Live".to_string(),
            category: Some("Basketball. NBA".to_string()),
            logo: None,
            date: now(),
            live: true,
        }
    }

    fn feed_item() -> FeedItem {
        FeedItem {
            index: 2,
            title: "Sinner vs Alcaraz".to_string(),
            description: "ATP Finals, tennis".to_string(),
            link: "https://example.com/event/9".to_string(),
            published: Some(now() - Duration::hours(1)),
            live: true,
        }
    }

    #[test]
    fn test_listing_match() {
        let m = Normalizer::new(PLAYER).normalize(RawCandidate::Listing(listing_item()), now());
        assert_eq!(m.id, "mobile-4");
        assert_eq!(m.slug, "lakers-vs-celtics");
        assert_eq!(m.category, Sport::Basketball);
        assert_eq!(m.league, "Basketball. NBA");
        assert!(m.popular);
        assert!(m.live);
        assert_eq!(m.teams.as_ref().unwrap().home.name, "Celtics");

        assert_eq!(m.sources.len(), 1);
        let source = &m.sources[0];
        assert_eq!(source.embed, listing_item().link);
        let params = source.stream_params.as_ref().unwrap();
        assert_eq!(params.channel_id, "12");
        assert_eq!(params.event_id, "345");
    }

    #[test]
    fn test_listing_logo_fallback() {
        let item = ListingItem {
            category: None,
            logo: Some("/img/sport/snooker.gif".to_string()),
            ..listing_item()
        };
        let m = Normalizer::new(PLAYER).normalize(RawCandidate::Listing(item), now());
        assert_eq!(m.category, Sport::Snooker);
        assert_eq!(m.league, DEFAULT_LEAGUE);
        assert!(!m.popular);
    }

    #[test]
    fn test_tennis_popular_only_on_listing() {
        let listing = ListingItem {
            category: Some("Tennis. ATP Vienna".to_string()),
            ..listing_item()
        };
        let normalizer = Normalizer::new(PLAYER);
        let from_listing = normalizer.normalize(RawCandidate::Listing(listing), now());
        let from_feed = normalizer.normalize(RawCandidate::Feed(feed_item()), now());

        assert_eq!(from_listing.category, Sport::Tennis);
        assert_eq!(from_feed.category, Sport::Tennis);
        assert!(from_listing.popular);
        assert!(!from_feed.popular);
    }

    #[test]
    fn test_feed_match_with_player_links() {
        let item = FeedItem {
            description: r##"NBA regular season
                <a href="#" onclick="show_webplayer('ifr','55','1001','7','3','0','en')">HD</a>
                <a href="#" onclick="show_webplayer('ifr','56','1001','8','3','1','de')"></a>"##
                .to_string(),
            title: "Knicks vs Heat".to_string(),
            ..feed_item()
        };
        let m = Normalizer::new(PLAYER).normalize(RawCandidate::Feed(item), now());
        assert_eq!(m.id, "rss-2");
        assert_eq!(m.category, Sport::Basketball);
        assert_eq!(m.league, "NBA");
        assert!(m.popular);
        assert_eq!(m.date, now() - Duration::hours(1));

        assert_eq!(m.sources.len(), 2);
        assert_eq!(m.sources[0].name, "HD");
        assert_eq!(m.sources[1].name, "Stream 2");
        assert_eq!(m.sources[1].id, "rss-2-1");
        assert!(m.sources[0].embed.starts_with(PLAYER));
        assert!(m.sources[1].embed.contains("lang=de"));
    }

    #[test]
    fn test_feed_falls_back_to_link() {
        let m = Normalizer::new(PLAYER).normalize(RawCandidate::Feed(feed_item()), now());
        assert_eq!(m.sources.len(), 1);
        assert_eq!(m.sources[0].embed, "https://example.com/event/9");
        assert!(m.sources[0].stream_params.is_none());
    }

    #[test]
    fn test_feed_missing_date_uses_now() {
        let item = FeedItem {
            published: None,
            live: false,
            title: "???".to_string(),
            ..feed_item()
        };
        let m = Normalizer::new(PLAYER).normalize(RawCandidate::Feed(item), now());
        assert_eq!(m.date, now());
        assert_eq!(m.slug, "rss-2");
        assert!(m.teams.is_none());
    }

    #[test]
    fn test_bad_player_url_uses_link() {
        let item = FeedItem {
            description: r#"<a onclick="show_webplayer('ifr','55','1001','7','3','0','en')">HD</a>"#
                .to_string(),
            ..feed_item()
        };
        let m = Normalizer::new("not a url").normalize(RawCandidate::Feed(item), now());
        assert_eq!(m.sources.len(), 1);
        assert_eq!(m.sources[0].embed, "https://example.com/event/9");
    }
}
