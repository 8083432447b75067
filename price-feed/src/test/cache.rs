#![cfg(test)]

use super::{FeedTest, ONE, START_TIME};
use common::pricefeed::types::{
    CachedPrice, FeedError, FeedEvent, FeedState, PriceUpdate, SafePrice,
};
use soroban_sdk::{testutils::Ledger, vec};

#[test]
fn test_safe_price_reverts_before_first_update() {
    let test = FeedTest::setup();
    let state = test.initialized_state();

    assert_eq!(
        test.feed_client.try_safe_price(&state),
        Err(Ok(FeedError::Uninitialized))
    );
    assert_eq!(
        test.feed_client.try_safe_price(&FeedState::uninitialized()),
        Err(Ok(FeedError::Uninitialized))
    );
}

#[test]
fn test_update_safe_price() {
    let test = FeedTest::setup();
    let state = test.initialized_state();

    test.set_prices(ONE, ONE * 98 / 100);
    let transition = test.feed_client.update_safe_price(&state);

    assert_eq!(
        transition.state.safe_price,
        CachedPrice::Set(SafePrice {
            price: ONE * 98 / 100,
            timestamp: START_TIME,
        })
    );
    assert_eq!(
        transition.events,
        vec![
            &test.env,
            FeedEvent::SafePriceUpdated(PriceUpdate {
                from_price: 0,
                to_price: ONE * 98 / 100,
            })
        ]
    );
    assert_eq!(
        test.feed_client.safe_price(&transition.state),
        (ONE * 98 / 100, START_TIME)
    );
}

#[test]
fn test_update_safe_price_fails_on_unsafe() {
    let test = FeedTest::setup();
    let state = test.initialized_state();

    test.set_prices(ONE, ONE * 98 / 100);
    let state = test.feed_client.update_safe_price(&state).state;

    test.set_prices(ONE, ONE * 90 / 100);
    assert_eq!(
        test.feed_client.try_update_safe_price(&state),
        Err(Ok(FeedError::PriceUnsafe))
    );

    test.set_prices(ONE, ONE * 102 / 100);
    assert_eq!(
        test.feed_client.try_update_safe_price(&state),
        Err(Ok(FeedError::PriceUnsafe))
    );
}

#[test]
fn test_update_with_same_price_still_emits() {
    let test = FeedTest::setup();
    let state = test.initialized_state();
    let price = ONE * 98 / 100;

    test.set_prices(ONE, price);
    let state = test.feed_client.update_safe_price(&state).state;
    test.advance(12);
    let transition = test.feed_client.update_safe_price(&state);

    assert_eq!(
        transition.events,
        vec![
            &test.env,
            FeedEvent::SafePriceUpdated(PriceUpdate {
                from_price: price,
                to_price: price,
            })
        ]
    );
    assert_eq!(
        transition.state.safe_price,
        CachedPrice::Set(SafePrice {
            price,
            timestamp: START_TIME + 12,
        })
    );
}

#[test]
fn test_fetch_returns_fresh_cache_unchanged() {
    let test = FeedTest::setup();
    let state = test.initialized_state();

    test.set_prices(ONE, ONE * 98 / 100);
    let state = test.feed_client.update_safe_price(&state).state;

    // a live price that would now fail validation is not consulted
    test.set_prices(ONE, ONE * 90 / 100);
    test.advance(60);
    let transition = test.feed_client.fetch_safe_price(&state, &60u64);

    assert_eq!(transition.state, state);
    assert_eq!(transition.events.len(), 0);
}

#[test]
fn test_fetch_revalidates_stale_cache() {
    let test = FeedTest::setup();
    let state = test.initialized_state();

    test.set_prices(ONE, ONE * 98 / 100);
    let state = test.feed_client.update_safe_price(&state).state;

    test.set_prices(ONE, ONE * 97 / 100);
    test.advance(61);
    let transition = test.feed_client.fetch_safe_price(&state, &60u64);

    assert_eq!(
        transition.state.safe_price,
        CachedPrice::Set(SafePrice {
            price: ONE * 97 / 100,
            timestamp: START_TIME + 61,
        })
    );
    assert_eq!(transition.events.len(), 1);

    test.set_prices(ONE, ONE * 90 / 100);
    test.advance(61);
    assert_eq!(
        test.feed_client.try_fetch_safe_price(&transition.state, &60u64),
        Err(Ok(FeedError::PriceUnsafe))
    );
}

#[test]
fn test_fetch_never_trusts_unset_cache() {
    let test = FeedTest::setup();
    let state = test.initialized_state();

    test.set_prices(ONE, ONE * 99 / 100);
    let transition = test.feed_client.fetch_safe_price(&state, &u64::MAX);
    assert_eq!(
        transition.state.safe_price,
        CachedPrice::Set(SafePrice {
            price: ONE * 99 / 100,
            timestamp: START_TIME,
        })
    );
    assert_eq!(transition.events.len(), 1);

    test.set_prices(ONE, ONE * 80 / 100);
    assert_eq!(
        test.feed_client.try_fetch_safe_price(&state, &u64::MAX),
        Err(Ok(FeedError::PriceUnsafe))
    );
}

#[test]
fn test_fetch_at_ledger_time_zero() {
    let test = FeedTest::setup();
    test.env.ledger().set_timestamp(0);
    let state = test.initialized_state();

    assert_eq!(state.safe_price, CachedPrice::Unset);
    test.set_prices(ONE, ONE * 99 / 100);
    let state = test.feed_client.update_safe_price(&state).state;
    assert_eq!(
        state.safe_price,
        CachedPrice::Set(SafePrice {
            price: ONE * 99 / 100,
            timestamp: 0,
        })
    );

    // a commit at time zero is still a commit
    test.set_prices(ONE, ONE * 50 / 100);
    let transition = test.feed_client.fetch_safe_price(&state, &0u64);
    assert_eq!(transition.events.len(), 0);
    assert_eq!(test.feed_client.safe_price(&transition.state), (ONE * 99 / 100, 0));
}

#[test]
fn test_cache_paths_require_initialization() {
    let test = FeedTest::setup();
    let state = FeedState::uninitialized();

    assert_eq!(
        test.feed_client.try_update_safe_price(&state),
        Err(Ok(FeedError::Uninitialized))
    );
    assert_eq!(
        test.feed_client.try_fetch_safe_price(&state, &0u64),
        Err(Ok(FeedError::Uninitialized))
    );
    assert_eq!(
        test.feed_client.try_fetch_safe_price(&state, &(1000 * 60 * 60 * 24 * 365)),
        Err(Ok(FeedError::Uninitialized))
    );
}
