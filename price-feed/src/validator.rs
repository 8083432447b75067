use common::pricefeed::types::{FeedError, FeedState, BPS_DENOMINATOR, PEG};
use soroban_sdk::Env;

use crate::sources::{get_pool_client, get_reference_client};

/// Live reading of both sources together with the safety verdict.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceCheck {
    pub pool_price: i128,
    pub reference_price: i128,
    pub is_safe: bool,
}

/// Decides whether `pool_price` can be trusted.
///
/// The pool price must not exceed the peg, and its distance from the
/// reference price must stay within `max_safe_price_difference` basis points
/// of the reference price. Divergence is always measured against the
/// reference, so the same absolute gap is judged differently depending on
/// which side is lower.
pub fn evaluate(pool_price: i128, reference_price: i128, max_safe_price_difference: u32) -> bool {
    if pool_price > PEG || pool_price < 0 || reference_price <= 0 {
        return false;
    }

    let tolerance = match reference_price.checked_mul(max_safe_price_difference as i128) {
        Some(scaled) => scaled / BPS_DENOMINATOR,
        None => return false,
    };

    (pool_price - reference_price).abs() <= tolerance
}

pub fn check_live(env: &Env, state: &FeedState) -> Result<PriceCheck, FeedError> {
    let pool_price = get_pool_client(env, state)?.get_price();
    let reference_price = get_reference_client(env, state)?.get_price();

    Ok(PriceCheck {
        pool_price,
        reference_price,
        is_safe: evaluate(pool_price, reference_price, state.max_safe_price_difference),
    })
}
