use common::{
    pricefeed::{interface::SafePriceFeedClient, types::Transition},
    proxy::types::ProxyError,
};
use soroban_sdk::{log, Address, Bytes, Env};

use crate::{
    events::ProxyEvent,
    storage::{read_feed_state, read_implementation, read_proxy_admin, store_data, FEED_STATE, IMPLEMENTATION},
};

pub fn get_feed_client<'a>(env: &Env) -> SafePriceFeedClient<'a> {
    SafePriceFeedClient::new(env, &read_implementation(env))
}

/// Points the gateway at `implementation` and, when `init_calldata` is not
/// empty, runs it through the new implementation's `migrate` as `caller`.
/// A failing initializer traps, and the host discards the pointer swap along
/// with everything else the invocation wrote.
pub fn install(env: &Env, implementation: &Address, caller: &Address, init_calldata: &Bytes) {
    let feed_client = SafePriceFeedClient::new(env, implementation);
    let version = feed_client.version();
    log!(env, "installing implementation version {}", version);

    store_data(env, &IMPLEMENTATION, implementation);

    if !init_calldata.is_empty() {
        let transition = feed_client.migrate(&read_feed_state(env), caller, init_calldata);
        apply(env, transition);
    }
}

pub fn apply(env: &Env, transition: Transition) {
    store_data(env, &FEED_STATE, &transition.state);
    for event in transition.events.iter() {
        ProxyEvent::from(event).publish(env);
    }
}

pub fn require_proxy_admin(env: &Env, caller: &Address) -> Result<Address, ProxyError> {
    let admin = read_proxy_admin(env);
    if admin != *caller {
        return Err(ProxyError::GatewayUnauthorized);
    }
    Ok(admin)
}
