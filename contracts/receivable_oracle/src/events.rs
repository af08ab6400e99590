use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct RatingUpdatedEvent {
    pub issuer: Address,
    pub rating: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AssetPriceUpdatedEvent {
    pub price: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MarketRateUpdatedEvent {
    pub rate_bps: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct InflationRateUpdatedEvent {
    pub rate_bps: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PaidStatusUpdatedEvent {
    pub id: u32,
    pub paid: bool,
    pub timestamp: u64,
}
