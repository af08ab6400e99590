use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone, Debug)]
pub struct IssuerAuthorizedEvent {
    pub issuer: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct IssuerRevokedEvent {
    pub issuer: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OracleUpdatedEvent {
    pub oracle: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RiskRateUpdatedEvent {
    pub rate_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct CreatedEvent {
    pub id: u32,
    pub issuer: Address,
    pub rating: u32,
    pub discount_value: i128,
    pub face_value: i128,
    pub maturity: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PurchasedEvent {
    pub id: u32,
    pub buyer: Address,
    pub amount: i128,
    /// Issuer rating the price was computed against
    pub rating: u32,
    pub base_risk_rate_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RedeemedEvent {
    pub id: u32,
    pub holder: Address,
    pub payout: i128,
    /// True when the off-chain-paid path fired before maturity
    pub early: bool,
    pub reason: Symbol,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolFundedEvent {
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolWithdrawnEvent {
    pub amount: i128,
    pub balance: i128,
}
