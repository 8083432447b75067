use soroban_sdk::{contractclient, Env};

/// An upstream price source. Reads may trap, the failure reaches the caller unchanged.
#[contractclient(name = "PriceSourceClient")]
pub trait PriceSourceInterface {
    fn get_price(env: Env) -> i128;
}
