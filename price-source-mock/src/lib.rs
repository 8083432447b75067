#![no_std]
use common::source::interface::PriceSourceInterface;
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, symbol_short, Env, Symbol};

const PRICE: Symbol = symbol_short!("PRICE");
const BROKEN: Symbol = symbol_short!("BROKEN");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SourceError {
    SourceUnavailable = 901,
}

/// Settable stand-in for an upstream price source.
#[contract]
pub struct MockPriceSource;

#[contractimpl]
impl MockPriceSource {
    pub fn __constructor(env: Env, price: i128) {
        env.storage().instance().set(&PRICE, &price);
    }

    pub fn set_price(env: Env, price: i128) {
        env.storage().instance().set(&PRICE, &price);
    }

    /// Makes every following `get_price` trap until cleared.
    pub fn set_broken(env: Env, broken: bool) {
        env.storage().instance().set(&BROKEN, &broken);
    }
}

#[contractimpl]
impl PriceSourceInterface for MockPriceSource {
    fn get_price(env: Env) -> i128 {
        if env.storage().instance().get(&BROKEN).unwrap_or(false) {
            panic_with_error!(&env, SourceError::SourceUnavailable);
        }
        env.storage().instance().get(&PRICE).unwrap_or(0)
    }
}
