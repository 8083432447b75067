use soroban_sdk::{contracterror, contracttype, Address, Env, Vec};

/// Prices are fixed point numbers with 18 decimals.
pub const PRICE_DECIMALS: u32 = 18;
/// Nominal 1:1 exchange rate. A pool price above it is never safe.
pub const PEG: i128 = 10i128.pow(PRICE_DECIMALS);
pub const BPS_DENOMINATOR: i128 = 10_000;
/// Upper bound for the divergence setting (10%).
pub const MAX_SAFE_PRICE_DIFFERENCE_LIMIT: u32 = 1_000;
pub const DEFAULT_MAX_SAFE_PRICE_DIFFERENCE: u32 = 500;
/// Strkeys of the all-zero account and contract ids, never valid sources.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeedError {
    Uninitialized = 1,
    AlreadyInitialized = 2,
    InvalidParameter = 3,
    PriceUnsafe = 4,
    Unauthorized = 5,
}

/// Last validated price and the ledger time it was committed at.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SafePrice {
    pub price: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CachedPrice {
    // Never validated, also when the ledger time is 0
    Unset,
    Set(SafePrice),
}

/// Storage layout shared by every feed implementation. The gateway keeps it,
/// implementations receive it and hand back a new version, so fields may be
/// appended by later implementations but never reordered or reinterpreted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedState {
    pub initialized: bool,
    pub max_safe_price_difference: u32,
    pub reference_source: Option<Address>,
    pub pool_source: Option<Address>,
    // None blocks every admin-gated call for good
    pub admin: Option<Address>,
    pub safe_price: CachedPrice,
}

impl FeedState {
    pub fn uninitialized() -> Self {
        FeedState {
            initialized: false,
            max_safe_price_difference: 0,
            reference_source: None,
            pool_source: None,
            admin: None,
            safe_price: CachedPrice::Unset,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitParams {
    pub max_safe_price_difference: u32,
    pub reference_source: Address,
    pub pool_source: Address,
    pub admin: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceUpdate {
    pub from_price: i128,
    pub to_price: i128,
}

/// Events produced by an implementation. The gateway publishes them under
/// its own address once the new state is committed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedEvent {
    SafePriceUpdated(PriceUpdate),
    AdminChanged(Option<Address>),
    MaxSafePriceDifferenceChanged(u32),
}

/// Result of a mutating feed call: the state to persist and the events to emit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    pub state: FeedState,
    pub events: Vec<FeedEvent>,
}

impl Transition {
    pub fn new(state: FeedState, events: Vec<FeedEvent>) -> Self {
        Transition { state, events }
    }

    pub fn unchanged(env: &Env, state: FeedState) -> Self {
        Transition {
            state,
            events: Vec::new(env),
        }
    }
}

/// Initializer calls accepted by `migrate`, XDR encoded into the upgrade calldata.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedCall {
    Initialize(InitParams),
    SetAdmin(Option<Address>),
    SetMaxSafePriceDifference(u32),
    UpdateSafePrice,
}
