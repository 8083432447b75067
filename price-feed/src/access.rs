use common::pricefeed::types::{
    CachedPrice, FeedError, FeedEvent, FeedState, Transition, MAX_SAFE_PRICE_DIFFERENCE_LIMIT,
    ZERO_ACCOUNT, ZERO_CONTRACT,
};
use soroban_sdk::{log, vec, Address, Env, String};

pub fn initialize(
    env: &Env,
    state: FeedState,
    max_safe_price_difference: u32,
    reference_source: Address,
    pool_source: Address,
    admin: Option<Address>,
) -> Result<Transition, FeedError> {
    if state.initialized {
        return Err(FeedError::AlreadyInitialized);
    }
    ensure_valid_difference(max_safe_price_difference)?;

    if is_zero_address(env, &reference_source) || is_zero_address(env, &pool_source) {
        return Err(FeedError::InvalidParameter);
    }

    log!(env, "initialized with max difference {}", max_safe_price_difference);

    let state = FeedState {
        initialized: true,
        max_safe_price_difference,
        reference_source: Some(reference_source),
        pool_source: Some(pool_source),
        admin,
        safe_price: CachedPrice::Unset,
    };
    Ok(Transition::unchanged(env, state))
}

pub fn set_admin(
    env: &Env,
    mut state: FeedState,
    caller: &Address,
    new_admin: Option<Address>,
) -> Result<Transition, FeedError> {
    require_admin(&state, caller)?;

    state.admin = new_admin.clone();
    Ok(Transition::new(state, vec![env, FeedEvent::AdminChanged(new_admin)]))
}

pub fn set_max_safe_price_difference(
    env: &Env,
    mut state: FeedState,
    caller: &Address,
    max_safe_price_difference: u32,
) -> Result<Transition, FeedError> {
    require_admin(&state, caller)?;
    ensure_valid_difference(max_safe_price_difference)?;

    state.max_safe_price_difference = max_safe_price_difference;
    Ok(Transition::new(
        state,
        vec![
            env,
            FeedEvent::MaxSafePriceDifferenceChanged(max_safe_price_difference),
        ],
    ))
}

/// An absent admin matches no caller, so a nulled admin can never be restored.
pub fn require_admin(state: &FeedState, caller: &Address) -> Result<(), FeedError> {
    match &state.admin {
        Some(admin) if admin == caller => Ok(()),
        _ => Err(FeedError::Unauthorized),
    }
}

fn is_zero_address(env: &Env, address: &Address) -> bool {
    [ZERO_ACCOUNT, ZERO_CONTRACT]
        .iter()
        .any(|strkey| *address == Address::from_string(&String::from_str(env, strkey)))
}

fn ensure_valid_difference(max_safe_price_difference: u32) -> Result<(), FeedError> {
    if max_safe_price_difference > MAX_SAFE_PRICE_DIFFERENCE_LIMIT {
        return Err(FeedError::InvalidParameter);
    }
    Ok(())
}
