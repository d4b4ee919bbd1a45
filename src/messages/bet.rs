//! Bet action catalog

use super::action::{ActionCreator, FieldDefault::*};

pub struct BetTypes;

impl BetTypes {
    pub const CREATE: &'static str = "Bet/CREATE";
    pub const CREATE_FAILED: &'static str = "Bet/CREATE_FAILED";
    pub const CREATE_SUCCEEDED: &'static str = "Bet/CREATE_SUCCEEDED";
    pub const FETCH_OPEN_BETS: &'static str = "Bet/FETCH_OPEN_BETS";
    pub const FETCH_OPEN_BETS_FAILED: &'static str = "Bet/FETCH_OPEN_BETS_FAILED";
    pub const FETCH_OPEN_BETS_SUCCEEDED: &'static str = "Bet/FETCH_OPEN_BETS_SUCCEEDED";
    pub const FETCH_OUTCOMES: &'static str = "Bet/FETCH_OUTCOMES";
    pub const FETCH_SELL_OUTCOMES: &'static str = "Bet/FETCH_SELL_OUTCOMES";
    pub const PLACE: &'static str = "Bet/PLACE";
    pub const PLACE_FAILED: &'static str = "Bet/PLACE_FAILED";
    pub const PLACE_SUCCEEDED: &'static str = "Bet/PLACE_SUCCEEDED";
    pub const PULL_OUT_BET: &'static str = "Bet/PULL_OUT_BET";
    pub const PULL_OUT_BET_FAILED: &'static str = "Bet/PULL_OUT_BET_FAILED";
    pub const PULL_OUT_BET_SUCCEEDED: &'static str = "Bet/PULL_OUT_BET_SUCCEEDED";
    pub const SET_OUTCOMES: &'static str = "Bet/SET_OUTCOMES";
    pub const SET_SELL_OUTCOMES: &'static str = "Bet/SET_SELL_OUTCOMES";
    pub const FETCH_TRADE_HISTORY: &'static str = "Bet/FETCH_TRADE_HISTORY";
    pub const FETCH_TRADE_HISTORY_SUCCESS: &'static str = "Bet/FETCH_TRADE_HISTORY_SUCCESS";
}

pub struct BetActions;

impl BetActions {
    pub const CREATE: ActionCreator = ActionCreator::new(
        BetTypes::CREATE,
        &[
            ("eventId", Null),
            ("marketQuestion", Null),
            ("description", Null),
            ("outcomes", Null),
            ("endDate", Null),
            ("liquidityAmount", Int(1)),
        ],
    );
    pub const CREATE_SUCCEEDED: ActionCreator =
        ActionCreator::new(BetTypes::CREATE_SUCCEEDED, &[("bet", Null)]);
    pub const CREATE_FAILED: ActionCreator = ActionCreator::bare(BetTypes::CREATE_FAILED);

    pub const PLACE: ActionCreator = ActionCreator::new(
        BetTypes::PLACE,
        &[("betId", Null), ("amount", Null), ("outcome", Null)],
    );
    pub const PLACE_SUCCEEDED: ActionCreator = ActionCreator::new(
        BetTypes::PLACE_SUCCEEDED,
        &[("betId", Null), ("amount", Null), ("outcome", Null)],
    );
    pub const PLACE_FAILED: ActionCreator = ActionCreator::bare(BetTypes::PLACE_FAILED);

    pub const SET_OUTCOMES: ActionCreator =
        ActionCreator::new(BetTypes::SET_OUTCOMES, &[("outcomes", EmptyObject)]);
    pub const SET_SELL_OUTCOMES: ActionCreator =
        ActionCreator::new(BetTypes::SET_SELL_OUTCOMES, &[("sellOutcomes", EmptyObject)]);
    pub const FETCH_OUTCOMES: ActionCreator =
        ActionCreator::new(BetTypes::FETCH_OUTCOMES, &[("betId", Null), ("amount", Null)]);
    pub const FETCH_SELL_OUTCOMES: ActionCreator = ActionCreator::new(
        BetTypes::FETCH_SELL_OUTCOMES,
        &[("betId", Null), ("amount", Null)],
    );

    pub const FETCH_OPEN_BETS: ActionCreator = ActionCreator::bare(BetTypes::FETCH_OPEN_BETS);
    pub const FETCH_OPEN_BETS_SUCCEEDED: ActionCreator =
        ActionCreator::new(BetTypes::FETCH_OPEN_BETS_SUCCEEDED, &[("openBets", Null)]);
    pub const FETCH_OPEN_BETS_FAILED: ActionCreator =
        ActionCreator::bare(BetTypes::FETCH_OPEN_BETS_FAILED);

    pub const PULL_OUT_BET: ActionCreator = ActionCreator::new(
        BetTypes::PULL_OUT_BET,
        &[("betId", Null), ("outcome", Null), ("amount", Null)],
    );
    pub const PULL_OUT_BET_SUCCEEDED: ActionCreator =
        ActionCreator::bare(BetTypes::PULL_OUT_BET_SUCCEEDED);
    pub const PULL_OUT_BET_FAILED: ActionCreator =
        ActionCreator::bare(BetTypes::PULL_OUT_BET_FAILED);

    pub const FETCH_TRADE_HISTORY: ActionCreator =
        ActionCreator::bare(BetTypes::FETCH_TRADE_HISTORY);
    pub const FETCH_TRADE_HISTORY_SUCCESS: ActionCreator =
        ActionCreator::new(BetTypes::FETCH_TRADE_HISTORY_SUCCESS, &[("trades", EmptyArray)]);
}
