use soroban_sdk::contracterror;

// Codes start past the feed range so the two admin domains never collide.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProxyError {
    GatewayUnauthorized = 101,
    InvalidProxyAdmin = 102,
    NotDeployed = 103,
}
