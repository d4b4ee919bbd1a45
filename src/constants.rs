//! Application constants
//!
//! Centralized location for route templates, event types and configuration defaults.

/// Default base URL of the betting REST API
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default base URL of the third-party news API
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2";

/// Default log file name (written next to the working directory)
pub const DEFAULT_LOG_FILE: &str = "wagerdesk.log";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page size for event listings
pub const DEFAULT_PAGE_SIZE: u64 = 30;

/// Application name
pub const APP_NAME: &str = "wagerdesk";

/// Event type strings as reported by the API
pub struct EventTypes;

impl EventTypes {
    pub const STREAMED: &'static str = "streamed";
    pub const NON_STREAMED: &'static str = "non-streamed";
}

/// Route templates. `:name` segments are filled in by [`route_with_parameters`].
pub struct Routes;

impl Routes {
    pub const HOME: &'static str = "/";
    pub const EVENTS: &'static str = "/events/:category";
    pub const LIVE_EVENTS: &'static str = "/live-events/:category";
    pub const ELON_GAME: &'static str = "/elon-game";
    pub const ROSI_GAME: &'static str = "/games/rosi";
}

/// Substitute `:name` segments of a route template.
///
/// Segments without a matching parameter are left untouched.
pub fn route_with_parameters(route: &str, params: &[(&str, &str)]) -> String {
    route
        .split('/')
        .map(|segment| {
            segment
                .strip_prefix(':')
                .and_then(|name| params.iter().find(|(key, _)| *key == name))
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| segment.to_string())
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// One step of the Elon game promo
#[derive(Debug, Clone, Copy)]
pub struct GameStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub image_text: Option<&'static str>,
}

pub const ELON_GAME_STEPS: &[GameStep] = &[
    GameStep {
        number: 1,
        title: "Place your bet",
        description: "Choose your stake before the rocket lifts off.",
        image_text: None,
    },
    GameStep {
        number: 2,
        title: "Watch the multiplier",
        description: "The longer Elon flies, the higher your payout climbs.",
        image_text: Some("x1.00 → x10.00"),
    },
    GameStep {
        number: 3,
        title: "Cash out in time",
        description: "Cash out before the crash to lock in your winnings.",
        image_text: Some("CASH OUT"),
    },
];
