use common::{pricefeed::types::FeedState, proxy::types::ProxyError};
use soroban_sdk::{panic_with_error, symbol_short, Address, Env, IntoVal, Symbol, TryFromVal, Val};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub const IMPLEMENTATION: Symbol = symbol_short!("IMPL");
pub const PROXY_ADMIN: Symbol = symbol_short!("P_ADMIN");
pub const FEED_STATE: Symbol = symbol_short!("F_STATE");

pub fn extend_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn read_implementation(env: &Env) -> Address {
    get_data(env, &IMPLEMENTATION).unwrap_or_else(|| panic_with_error!(env, ProxyError::NotDeployed))
}

pub fn read_proxy_admin(env: &Env) -> Address {
    get_data(env, &PROXY_ADMIN).unwrap_or_else(|| panic_with_error!(env, ProxyError::NotDeployed))
}

pub fn read_feed_state(env: &Env) -> FeedState {
    get_data(env, &FEED_STATE).unwrap_or_else(FeedState::uninitialized)
}
