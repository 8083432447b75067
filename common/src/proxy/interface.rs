use soroban_sdk::{contractclient, Address, Bytes, Env};

use super::types::ProxyError;

/// Administrative surface of the upgradeable gateway. Every other call made
/// on the gateway address is served by the active implementation.
#[contractclient(name = "UpgradeableProxyClient")]
pub trait UpgradeableProxyInterface {
    fn proxy_version() -> u32;
    fn upgrade_to(
        env: Env,
        caller: Address,
        new_implementation: Address,
        init_calldata: Bytes,
    ) -> Result<(), ProxyError>;
    fn change_proxy_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ProxyError>;
    fn implementation(env: Env) -> Address;
    fn proxy_admin(env: Env) -> Address;
}
