use common::{
    pricefeed::types::{FeedError, FeedState},
    source::interface::PriceSourceClient,
};
use soroban_sdk::Env;

pub fn get_reference_client<'a>(env: &Env, state: &FeedState) -> Result<PriceSourceClient<'a>, FeedError> {
    let reference_ca = state
        .reference_source
        .as_ref()
        .ok_or(FeedError::Uninitialized)?;
    Ok(PriceSourceClient::new(env, reference_ca))
}

pub fn get_pool_client<'a>(env: &Env, state: &FeedState) -> Result<PriceSourceClient<'a>, FeedError> {
    let pool_ca = state.pool_source.as_ref().ok_or(FeedError::Uninitialized)?;
    Ok(PriceSourceClient::new(env, pool_ca))
}
