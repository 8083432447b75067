#![no_std]

mod access;
mod cache;
mod sources;
mod validator;

pub use validator::evaluate;

use common::pricefeed::{
    interface::SafePriceFeedInterface,
    types::{FeedCall, FeedError, FeedState, Transition},
};
use soroban_sdk::{contract, contractimpl, log, xdr::FromXdr, Address, Bytes, Env};

/// Manipulation-resistant price feed logic. It keeps no storage of its own;
/// the gateway owns the `FeedState` and applies the returned transitions.
#[contract]
pub struct SafePriceFeed;

#[contractimpl]
impl SafePriceFeedInterface for SafePriceFeed {
    fn version() -> u32 {
        1
    }

    fn initialize(
        env: Env,
        state: FeedState,
        max_safe_price_difference: u32,
        reference_source: Address,
        pool_source: Address,
        admin: Option<Address>,
    ) -> Result<Transition, FeedError> {
        access::initialize(
            &env,
            state,
            max_safe_price_difference,
            reference_source,
            pool_source,
            admin,
        )
    }

    fn current_price(env: Env, state: FeedState) -> Result<(i128, bool), FeedError> {
        let check = validator::check_live(&env, &state)?;
        Ok((check.pool_price, check.is_safe))
    }

    fn full_price_info(env: Env, state: FeedState) -> Result<(i128, bool, i128), FeedError> {
        let check = validator::check_live(&env, &state)?;
        Ok((check.pool_price, check.is_safe, check.reference_price))
    }

    fn safe_price(_env: Env, state: FeedState) -> Result<(i128, u64), FeedError> {
        let cached = cache::read(&state)?;
        Ok((cached.price, cached.timestamp))
    }

    fn update_safe_price(env: Env, state: FeedState) -> Result<Transition, FeedError> {
        cache::update(&env, state)
    }

    fn fetch_safe_price(env: Env, state: FeedState, max_age: u64) -> Result<Transition, FeedError> {
        cache::fetch(&env, state, max_age)
    }

    fn max_safe_price_difference(_env: Env, state: FeedState) -> u32 {
        state.max_safe_price_difference
    }

    fn admin(_env: Env, state: FeedState) -> Option<Address> {
        state.admin
    }

    fn set_admin(
        env: Env,
        state: FeedState,
        caller: Address,
        new_admin: Option<Address>,
    ) -> Result<Transition, FeedError> {
        access::set_admin(&env, state, &caller, new_admin)
    }

    fn set_max_safe_price_difference(
        env: Env,
        state: FeedState,
        caller: Address,
        max_safe_price_difference: u32,
    ) -> Result<Transition, FeedError> {
        access::set_max_safe_price_difference(&env, state, &caller, max_safe_price_difference)
    }

    /// Runs an initializer on behalf of `caller` as part of an upgrade.
    fn migrate(
        env: Env,
        state: FeedState,
        caller: Address,
        calldata: Bytes,
    ) -> Result<Transition, FeedError> {
        let call = FeedCall::from_xdr(&env, &calldata).map_err(|_| FeedError::InvalidParameter)?;
        log!(&env, "running initializer {}", call.clone());

        match call {
            FeedCall::Initialize(params) => access::initialize(
                &env,
                state,
                params.max_safe_price_difference,
                params.reference_source,
                params.pool_source,
                params.admin,
            ),
            FeedCall::SetAdmin(new_admin) => access::set_admin(&env, state, &caller, new_admin),
            FeedCall::SetMaxSafePriceDifference(max_safe_price_difference) => {
                access::set_max_safe_price_difference(&env, state, &caller, max_safe_price_difference)
            }
            FeedCall::UpdateSafePrice => cache::update(&env, state),
        }
    }
}
