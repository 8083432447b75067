#![no_std]

mod events;
mod gateway;
mod storage;

use common::{
    pricefeed::types::{CachedPrice, FeedError, FeedState},
    proxy::{interface::UpgradeableProxyInterface, types::ProxyError},
};
use events::ProxyEvent;
use gateway::{apply, get_feed_client, install, require_proxy_admin};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Bytes, Env};
use storage::{
    read_feed_state, read_implementation, read_proxy_admin, store_data, FEED_STATE, PROXY_ADMIN,
};

/// Upgradeable gateway in front of the price feed. It owns the feed state and
/// serves every feed call through the active implementation.
#[contract]
pub struct PriceFeedProxy;

#[contractimpl]
impl PriceFeedProxy {
    pub fn __constructor(env: Env, implementation: Address, admin: Address, init_calldata: Bytes) {
        if admin == env.current_contract_address() {
            panic_with_error!(&env, ProxyError::InvalidProxyAdmin);
        }

        store_data(&env, &PROXY_ADMIN, &admin);
        store_data(&env, &FEED_STATE, &FeedState::uninitialized());
        install(&env, &implementation, &admin, &init_calldata);

        ProxyEvent::Upgraded(implementation).publish(&env);
    }

    /// Version of the active implementation.
    pub fn version(env: Env) -> u32 {
        get_feed_client(&env).version()
    }

    pub fn initialize(
        env: Env,
        max_safe_price_difference: u32,
        reference_source: Address,
        pool_source: Address,
        admin: Option<Address>,
    ) -> Result<(), FeedError> {
        let transition = get_feed_client(&env).initialize(
            &read_feed_state(&env),
            &max_safe_price_difference,
            &reference_source,
            &pool_source,
            &admin,
        );
        apply(&env, transition);
        Ok(())
    }

    pub fn current_price(env: Env) -> Result<(i128, bool), FeedError> {
        Ok(get_feed_client(&env).current_price(&read_feed_state(&env)))
    }

    pub fn full_price_info(env: Env) -> Result<(i128, bool, i128), FeedError> {
        Ok(get_feed_client(&env).full_price_info(&read_feed_state(&env)))
    }

    pub fn safe_price(env: Env) -> Result<(i128, u64), FeedError> {
        Ok(get_feed_client(&env).safe_price(&read_feed_state(&env)))
    }

    pub fn update_safe_price(env: Env) -> Result<(), FeedError> {
        let transition = get_feed_client(&env).update_safe_price(&read_feed_state(&env));
        apply(&env, transition);
        Ok(())
    }

    pub fn fetch_safe_price(env: Env, max_age: u64) -> Result<(i128, u64), FeedError> {
        let transition = get_feed_client(&env).fetch_safe_price(&read_feed_state(&env), &max_age);
        let CachedPrice::Set(cached) = transition.state.safe_price.clone() else {
            return Err(FeedError::Uninitialized);
        };

        apply(&env, transition);
        Ok((cached.price, cached.timestamp))
    }

    pub fn max_safe_price_difference(env: Env) -> u32 {
        get_feed_client(&env).max_safe_price_difference(&read_feed_state(&env))
    }

    pub fn admin(env: Env) -> Option<Address> {
        get_feed_client(&env).admin(&read_feed_state(&env))
    }

    pub fn set_admin(env: Env, caller: Address, new_admin: Option<Address>) -> Result<(), FeedError> {
        caller.require_auth();

        let transition =
            get_feed_client(&env).set_admin(&read_feed_state(&env), &caller, &new_admin);
        apply(&env, transition);
        Ok(())
    }

    pub fn set_max_safe_price_difference(
        env: Env,
        caller: Address,
        max_safe_price_difference: u32,
    ) -> Result<(), FeedError> {
        caller.require_auth();

        let transition = get_feed_client(&env).set_max_safe_price_difference(
            &read_feed_state(&env),
            &caller,
            &max_safe_price_difference,
        );
        apply(&env, transition);
        Ok(())
    }

    /// Raw feed state, for diagnostics.
    pub fn feed_state(env: Env) -> FeedState {
        read_feed_state(&env)
    }
}

#[contractimpl]
impl UpgradeableProxyInterface for PriceFeedProxy {
    fn proxy_version() -> u32 {
        1
    }

    fn upgrade_to(
        env: Env,
        caller: Address,
        new_implementation: Address,
        init_calldata: Bytes,
    ) -> Result<(), ProxyError> {
        caller.require_auth();
        require_proxy_admin(&env, &caller)?;

        install(&env, &new_implementation, &caller, &init_calldata);

        ProxyEvent::Upgraded(new_implementation).publish(&env);
        Ok(())
    }

    fn change_proxy_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ProxyError> {
        caller.require_auth();
        let previous_admin = require_proxy_admin(&env, &caller)?;

        if new_admin == env.current_contract_address() {
            return Err(ProxyError::InvalidProxyAdmin);
        }

        store_data(&env, &PROXY_ADMIN, &new_admin);
        ProxyEvent::AdminChanged(previous_admin, new_admin).publish(&env);
        Ok(())
    }

    fn implementation(env: Env) -> Address {
        read_implementation(&env)
    }

    fn proxy_admin(env: Env) -> Address {
        read_proxy_admin(&env)
    }
}
