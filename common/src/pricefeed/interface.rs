use soroban_sdk::{contractclient, Address, Bytes, Env};

use super::types::{FeedError, FeedState, Transition};

/// Logic side of the price feed. Implementations own no storage: every call
/// receives the current `FeedState` and mutating calls return a `Transition`.
#[contractclient(name = "SafePriceFeedClient")]
pub trait SafePriceFeedInterface {
    fn version() -> u32;
    fn initialize(
        env: Env,
        state: FeedState,
        max_safe_price_difference: u32,
        reference_source: Address,
        pool_source: Address,
        admin: Option<Address>,
    ) -> Result<Transition, FeedError>;
    fn current_price(env: Env, state: FeedState) -> Result<(i128, bool), FeedError>;
    fn full_price_info(env: Env, state: FeedState) -> Result<(i128, bool, i128), FeedError>;
    fn safe_price(env: Env, state: FeedState) -> Result<(i128, u64), FeedError>;
    fn update_safe_price(env: Env, state: FeedState) -> Result<Transition, FeedError>;
    fn fetch_safe_price(env: Env, state: FeedState, max_age: u64) -> Result<Transition, FeedError>;
    fn max_safe_price_difference(env: Env, state: FeedState) -> u32;
    fn admin(env: Env, state: FeedState) -> Option<Address>;
    fn set_admin(
        env: Env,
        state: FeedState,
        caller: Address,
        new_admin: Option<Address>,
    ) -> Result<Transition, FeedError>;
    fn set_max_safe_price_difference(
        env: Env,
        state: FeedState,
        caller: Address,
        max_safe_price_difference: u32,
    ) -> Result<Transition, FeedError>;
    fn migrate(
        env: Env,
        state: FeedState,
        caller: Address,
        calldata: Bytes,
    ) -> Result<Transition, FeedError>;
}
