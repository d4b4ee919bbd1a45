use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field decoders for API data whose shape varies between records.
/// A value of an unexpected shape becomes the field default instead of
/// failing the whole record.
mod lenient {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Tag;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub(super) fn parse_date(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// String, number or bool rendered as text; anything else is empty
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(text(Value::deserialize(d)?).unwrap_or_default())
    }

    /// Like [`string`], but null, empty and other shapes become `None`
    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(text(Value::deserialize(d)?).filter(|s| !s.is_empty()))
    }

    pub fn index<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let index = match Value::deserialize(d)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        Ok(index.and_then(|i| u32::try_from(i).ok()).unwrap_or_default())
    }

    /// RFC 3339, a plain `YYYY-MM-DD` date, or epoch milliseconds
    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => parse_date(&s),
            Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        })
    }

    /// Keep the list entries that decode, drop the rest
    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Tags arrive either as objects or as bare names
    pub fn tags<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Tag>, D::Error> {
        let Value::Array(items) = Value::deserialize(d)? else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(Tag { id: String::new(), name }),
                other => serde_json::from_value(other).ok(),
            })
            .collect())
    }
}

/// A market event (a match, a stream, a question) carrying its bets
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub event_type: String,
    #[serde(deserialize_with = "lenient::tags")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "lenient::list")]
    pub bets: Vec<Bet>,
    #[serde(deserialize_with = "lenient::date")]
    pub date: Option<DateTime<Utc>>,
}

impl Event {
    pub fn is_streamed(&self) -> bool {
        self.event_type == crate::constants::EventTypes::STREAMED
    }
}

/// A bet (market) attached to an event
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bet {
    #[serde(alias = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub market_question: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub creator: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub outcomes: Vec<Outcome>,
    #[serde(deserialize_with = "lenient::date")]
    pub end_date: Option<DateTime<Utc>>,
}

/// A possible outcome of a bet
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outcome {
    #[serde(deserialize_with = "lenient::index")]
    pub index: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
}

/// Event tag
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(alias = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
}

/// A platform user, as returned by the user endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", deserialize_with = "lenient::string")]
    pub user_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub username: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub profile_picture: Option<String>,
}

/// A trade from the user's trade history
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trade {
    #[serde(alias = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bet_id: String,
    #[serde(deserialize_with = "lenient::index")]
    pub outcome_index: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub investment_amount: String,
    #[serde(deserialize_with = "lenient::string")]
    pub outcome_tokens: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::date")]
    pub created_at: Option<DateTime<Utc>>,
}

/// News response body: the article list from the news provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsData {
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    pub total_results: u64,
    #[serde(deserialize_with = "lenient::list")]
    pub articles: Vec<NewsArticle>,
}

/// A single news article
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    pub source: Option<NewsSource>,
    #[serde(deserialize_with = "lenient::date")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSource {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_accepts_partial_payload() {
        let event: Event = serde_json::from_value(json!({
            "_id": "e1",
            "name": "Final",
            "type": "streamed",
            "bets": [{ "_id": "b1", "creator": "u1" }, { "_id": "b2" }]
        }))
        .unwrap();

        assert_eq!(event.id, "e1");
        assert!(event.is_streamed());
        assert_eq!(event.bets[0].creator.as_deref(), Some("u1"));
        assert_eq!(event.bets[1].creator, None);
    }

    #[test]
    fn test_news_article_without_source() {
        let data: NewsData = serde_json::from_value(json!({
            "articles": [{ "title": "Hello", "url": "https://example.com" }]
        }))
        .unwrap();

        assert_eq!(data.articles.len(), 1);
        assert!(data.articles[0].source.is_none());
    }

    #[test]
    fn test_loose_field_shapes_fall_back() {
        let event: Event = serde_json::from_value(json!({
            "_id": 7,
            "name": null,
            "date": "2021-06-01",
            "tags": ["sports", { "_id": "t1", "name": "nba" }, 3],
            "bets": [
                { "_id": "b1", "creator": 42, "endDate": "soon", "outcomes": [{ "index": "1", "name": "Yes" }] },
                "not a bet"
            ]
        }))
        .unwrap();

        assert_eq!(event.id, "7");
        assert_eq!(event.name, "");
        assert_eq!(event.date, lenient::parse_date("2021-06-01T00:00:00Z"));
        assert!(event.date.is_some());
        let tags: Vec<&str> = event.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tags, vec!["sports", "nba"]);
        assert_eq!(event.bets.len(), 1);
        assert_eq!(event.bets[0].creator.as_deref(), Some("42"));
        assert_eq!(event.bets[0].end_date, None);
        assert_eq!(event.bets[0].outcomes[0].index, 1);
    }

    #[test]
    fn test_trade_with_numeric_amounts() {
        let trade: Trade = serde_json::from_value(json!({
            "_id": "t1",
            "investmentAmount": 10,
            "outcomeTokens": 12.5,
            "createdAt": 1622505600000i64
        }))
        .unwrap();

        assert_eq!(trade.investment_amount, "10");
        assert_eq!(trade.outcome_tokens, "12.5");
        assert_eq!(trade.created_at, lenient::parse_date("2021-06-01T00:00:00Z"));
    }
}
