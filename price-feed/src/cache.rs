use common::pricefeed::types::{
    CachedPrice, FeedError, FeedEvent, FeedState, PriceUpdate, SafePrice, Transition,
};
use soroban_sdk::{log, vec, Env};

use crate::validator::check_live;

pub fn read(state: &FeedState) -> Result<SafePrice, FeedError> {
    match &state.safe_price {
        CachedPrice::Set(cached) => Ok(cached.clone()),
        CachedPrice::Unset => Err(FeedError::Uninitialized),
    }
}

/// A cache that was never written is stale for every `max_age`.
pub fn is_fresh(state: &FeedState, now: u64, max_age: u64) -> bool {
    match &state.safe_price {
        CachedPrice::Set(cached) => now.saturating_sub(cached.timestamp) <= max_age,
        CachedPrice::Unset => false,
    }
}

/// Validates the live price and, when safe, commits it with the current
/// ledger time. Every commit yields a `SafePriceUpdated` event, also when the
/// price did not move.
pub fn update(env: &Env, state: FeedState) -> Result<Transition, FeedError> {
    let check = check_live(env, &state)?;
    if !check.is_safe {
        log!(
            env,
            "price is not safe: pool {} reference {}",
            check.pool_price,
            check.reference_price
        );
        return Err(FeedError::PriceUnsafe);
    }

    Ok(commit(env, state, check.pool_price))
}

pub fn fetch(env: &Env, state: FeedState, max_age: u64) -> Result<Transition, FeedError> {
    if is_fresh(&state, env.ledger().timestamp(), max_age) {
        return Ok(Transition::unchanged(env, state));
    }

    update(env, state)
}

fn commit(env: &Env, mut state: FeedState, price: i128) -> Transition {
    let from_price = match &state.safe_price {
        CachedPrice::Set(cached) => cached.price,
        CachedPrice::Unset => 0,
    };
    state.safe_price = CachedPrice::Set(SafePrice {
        price,
        timestamp: env.ledger().timestamp(),
    });

    let event = FeedEvent::SafePriceUpdated(PriceUpdate {
        from_price,
        to_price: price,
    });
    Transition::new(state, vec![env, event])
}
