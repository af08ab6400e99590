use soroban_sdk::{contracttype, Address};

/// Top of the creditworthiness scale; ratings live in [0, RATING_CEILING].
pub const RATING_CEILING: u32 = 10;

/// Native-asset price record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Asset price at a given point in time
    pub price: i128,
    /// Recording timestamp
    pub timestamp: u64,
    /// False until the feed has been populated at least once
    pub is_valid: bool,
}

/// Creditworthiness rating of one issuer
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RatingData {
    /// Rating in [0, RATING_CEILING]; 0 means unrated/inactive
    pub rating: u32,
    pub updated_at: u64,
}

/// A basis-points rate (market interest or inflation)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateData {
    pub rate_bps: u32,
    pub updated_at: u64,
}

/// Off-chain payment confirmation for one instrument
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaidStatus {
    pub paid: bool,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    AssetPrice,
    MarketRate,
    InflationRate,
    Rating(Address),
    PaidOffchain(u32),
    Initialized,
}
