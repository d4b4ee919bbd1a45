//! Event action catalog

use super::action::{ActionCreator, FieldDefault::*};

pub struct EventTypes;

impl EventTypes {
    pub const FETCH_ALL: &'static str = "Event/FETCH_ALL";
    pub const FETCH_ALL_SUCCEEDED: &'static str = "Event/FETCH_ALL_SUCCEEDED";
    pub const FETCH_ALL_FAILED: &'static str = "Event/FETCH_ALL_FAILED";
    pub const FETCH_FILTERED: &'static str = "Event/FETCH_FILTERED";
    pub const FETCH_FILTERED_SUCCESS: &'static str = "Event/FETCH_FILTERED_SUCCESS";
    pub const FETCH_FILTERED_FAIL: &'static str = "Event/FETCH_FILTERED_FAIL";
    pub const SET_DEFAULT_PARAMS: &'static str = "Event/SET_DEFAULT_PARAMS";
    pub const FETCH_HOME_EVENTS: &'static str = "Event/FETCH_HOME_EVENTS";
    pub const FETCH_HOME_EVENTS_SUCCESS: &'static str = "Event/FETCH_HOME_EVENTS_SUCCESS";
    pub const FETCH_HOME_EVENTS_FAIL: &'static str = "Event/FETCH_HOME_EVENTS_FAIL";
    pub const FETCH_TAGS: &'static str = "Event/FETCH_TAGS";
    pub const FETCH_TAGS_SUCCESS: &'static str = "Event/FETCH_TAGS_SUCCESS";
    pub const FETCH_TAGS_FAIL: &'static str = "Event/FETCH_TAGS_FAIL";
    pub const FETCH_CHART_DATA: &'static str = "Event/FETCH_CHART_DATA";
    pub const FETCH_CHART_DATA_SUCCESS: &'static str = "Event/FETCH_CHART_DATA_SUCCESS";
    pub const FETCH_CHART_DATA_FAIL: &'static str = "Event/FETCH_CHART_DATA_FAIL";
    pub const FETCH_NEWS_DATA: &'static str = "Event/FETCH_NEWS_DATA";
    pub const FETCH_NEWS_DATA_SUCCESS: &'static str = "Event/FETCH_NEWS_DATA_SUCCESS";
    pub const FETCH_NEWS_DATA_FAIL: &'static str = "Event/FETCH_NEWS_DATA_FAIL";
    pub const DELETE_EVENT: &'static str = "Event/DELETE_EVENT";
    pub const DELETE_EVENT_SUCCESS: &'static str = "Event/DELETE_EVENT_SUCCESS";
    pub const DELETE_EVENT_FAIL: &'static str = "Event/DELETE_EVENT_FAIL";
}

pub struct EventActions;

impl EventActions {
    pub const FETCH_ALL: ActionCreator = ActionCreator::bare(EventTypes::FETCH_ALL);
    pub const FETCH_ALL_SUCCEEDED: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_ALL_SUCCEEDED, &[("events", EmptyArray)]);
    pub const FETCH_ALL_FAILED: ActionCreator = ActionCreator::bare(EventTypes::FETCH_ALL_FAILED);

    /// `params` are merged over the current default query parameters
    pub const FETCH_FILTERED: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_FILTERED, &[("params", EmptyObject)]);
    pub const FETCH_FILTERED_SUCCESS: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_FILTERED_SUCCESS, &[("events", EmptyArray)]);
    pub const FETCH_FILTERED_FAIL: ActionCreator =
        ActionCreator::bare(EventTypes::FETCH_FILTERED_FAIL);
    pub const SET_DEFAULT_PARAMS: ActionCreator =
        ActionCreator::new(EventTypes::SET_DEFAULT_PARAMS, &[("params", EmptyObject)]);

    pub const FETCH_HOME_EVENTS: ActionCreator = ActionCreator::new(
        EventTypes::FETCH_HOME_EVENTS,
        &[
            ("eventType", Null),
            ("page", Int(1)),
            ("count", Int(crate::constants::DEFAULT_PAGE_SIZE as i64)),
            ("category", Null),
            ("upcoming", Null),
            ("deactivated", Null),
            ("state", Null),
        ],
    );
    pub const FETCH_HOME_EVENTS_SUCCESS: ActionCreator = ActionCreator::new(
        EventTypes::FETCH_HOME_EVENTS_SUCCESS,
        &[
            ("eventType", Null),
            ("state", Null),
            ("events", EmptyArray),
            ("page", Null),
            ("count", Null),
        ],
    );
    pub const FETCH_HOME_EVENTS_FAIL: ActionCreator =
        ActionCreator::bare(EventTypes::FETCH_HOME_EVENTS_FAIL);

    pub const FETCH_TAGS: ActionCreator = ActionCreator::bare(EventTypes::FETCH_TAGS);
    pub const FETCH_TAGS_SUCCESS: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_TAGS_SUCCESS, &[("tags", EmptyArray)]);
    pub const FETCH_TAGS_FAIL: ActionCreator = ActionCreator::bare(EventTypes::FETCH_TAGS_FAIL);

    pub const FETCH_CHART_DATA: ActionCreator = ActionCreator::new(
        EventTypes::FETCH_CHART_DATA,
        &[("betId", Null), ("params", EmptyObject)],
    );
    pub const FETCH_CHART_DATA_SUCCESS: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_CHART_DATA_SUCCESS, &[("chartData", Null)]);
    pub const FETCH_CHART_DATA_FAIL: ActionCreator =
        ActionCreator::bare(EventTypes::FETCH_CHART_DATA_FAIL);

    pub const FETCH_NEWS_DATA: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_NEWS_DATA, &[("params", EmptyObject)]);
    pub const FETCH_NEWS_DATA_SUCCESS: ActionCreator =
        ActionCreator::new(EventTypes::FETCH_NEWS_DATA_SUCCESS, &[("newsData", Null)]);
    pub const FETCH_NEWS_DATA_FAIL: ActionCreator =
        ActionCreator::bare(EventTypes::FETCH_NEWS_DATA_FAIL);

    pub const DELETE_EVENT: ActionCreator =
        ActionCreator::new(EventTypes::DELETE_EVENT, &[("eventId", Null)]);
    pub const DELETE_EVENT_SUCCESS: ActionCreator =
        ActionCreator::new(EventTypes::DELETE_EVENT_SUCCESS, &[("event", Null)]);
    pub const DELETE_EVENT_FAIL: ActionCreator =
        ActionCreator::bare(EventTypes::DELETE_EVENT_FAIL);
}
