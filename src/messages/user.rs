//! User, popup and router action catalogs

use super::action::{ActionCreator, FieldDefault::*};

pub struct UserTypes;

impl UserTypes {
    pub const FETCH: &'static str = "User/FETCH";
    pub const FETCH_SUCCEEDED: &'static str = "User/FETCH_SUCCEEDED";
    pub const FETCH_FAILED: &'static str = "User/FETCH_FAILED";
}

pub struct UserActions;

impl UserActions {
    pub const FETCH: ActionCreator = ActionCreator::new(UserTypes::FETCH, &[("userId", Null)]);
    pub const FETCH_SUCCEEDED: ActionCreator =
        ActionCreator::new(UserTypes::FETCH_SUCCEEDED, &[("user", Null)]);
    pub const FETCH_FAILED: ActionCreator = ActionCreator::bare(UserTypes::FETCH_FAILED);
}

pub struct PopupTypes;

impl PopupTypes {
    pub const SHOW: &'static str = "Popup/SHOW";
    pub const HIDE: &'static str = "Popup/HIDE";
}

pub struct PopupActions;

impl PopupActions {
    pub const SHOW: ActionCreator = ActionCreator::new(
        PopupTypes::SHOW,
        &[("popupType", Null), ("options", EmptyObject)],
    );
    pub const HIDE: ActionCreator = ActionCreator::bare(PopupTypes::HIDE);
}

/// Popup kinds understood by the UI
pub struct PopupKinds;

impl PopupKinds {
    pub const DELETE_EVENT: &'static str = "deleteEvent";
}

pub struct RouterTypes;

impl RouterTypes {
    pub const PUSH: &'static str = "Router/PUSH";
}

pub struct RouterActions;

impl RouterActions {
    pub const PUSH: ActionCreator = ActionCreator::new(RouterTypes::PUSH, &[("path", Str("/"))]);
}
