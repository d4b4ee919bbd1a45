//! User workflow

use serde_json::json;

use crate::messages::{Action, UserActions, UserTypes};
use crate::network::ApiError;
use crate::sagas::context::SagaContext;
use crate::sagas::outcome::SagaOutcome;

pub async fn fetch(ctx: SagaContext, action: Action) -> SagaOutcome {
    let result = match action.str_field("userId") {
        Some(user_id) => ctx.api().get_user(user_id).await,
        None => Err(ApiError::MissingParameter("userId")),
    };

    match ctx.settle(result, UserTypes::FETCH) {
        Some(user) => {
            ctx.put(UserActions::FETCH_SUCCEEDED.create(json!({ "user": user })));
            SagaOutcome::Succeeded
        }
        None => {
            ctx.put(UserActions::FETCH_FAILED.empty());
            SagaOutcome::Failed
        }
    }
}
