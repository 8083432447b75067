use common::pricefeed::types::FeedEvent;
use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum ProxyEvent {
    Upgraded(Address),
    AdminChanged(Address, Address),
    SafePriceUpdated(i128, i128),
    FeedAdminChanged(Option<Address>),
    MaxSafePriceDifferenceChanged(u32),
}

impl ProxyEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ProxyEvent::Upgraded(..) => stringify!(Upgraded),
            ProxyEvent::AdminChanged(..) => stringify!(AdminChanged),
            ProxyEvent::SafePriceUpdated(..) => stringify!(SafePriceUpdated),
            // same name as the gateway's, told apart by its single field
            ProxyEvent::FeedAdminChanged(..) => stringify!(AdminChanged),
            ProxyEvent::MaxSafePriceDifferenceChanged(..) => {
                stringify!(MaxSafePriceDifferenceChanged)
            }
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            ProxyEvent::Upgraded(implementation) => {
                v.push_back(implementation.into_val(env));
            }
            ProxyEvent::AdminChanged(previous_admin, new_admin) => {
                v.push_back(previous_admin.into_val(env));
                v.push_back(new_admin.into_val(env));
            }
            ProxyEvent::SafePriceUpdated(from_price, to_price) => {
                v.push_back((*from_price).into_val(env));
                v.push_back((*to_price).into_val(env));
            }
            ProxyEvent::FeedAdminChanged(admin) => {
                v.push_back(admin.clone().into_val(env));
            }
            ProxyEvent::MaxSafePriceDifferenceChanged(max_safe_price_difference) => {
                v.push_back((*max_safe_price_difference).into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}

impl From<FeedEvent> for ProxyEvent {
    fn from(event: FeedEvent) -> Self {
        match event {
            FeedEvent::SafePriceUpdated(update) => {
                ProxyEvent::SafePriceUpdated(update.from_price, update.to_price)
            }
            FeedEvent::AdminChanged(admin) => ProxyEvent::FeedAdminChanged(admin),
            FeedEvent::MaxSafePriceDifferenceChanged(max_safe_price_difference) => {
                ProxyEvent::MaxSafePriceDifferenceChanged(max_safe_price_difference)
            }
        }
    }
}
