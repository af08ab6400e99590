use receivable_oracle::PriceData;
use receivable_token::InstrumentTerms;
use soroban_sdk::{contracttype, Address, String};

// Constants
pub const BASIS_POINTS: i128 = 10_000;
/// Upper bound for the base risk rate (10%)
pub const MAX_RISK_RATE_BPS: u32 = 1_000;
/// Base risk rate installed at initialization (2%)
pub const DEFAULT_RISK_RATE_BPS: u32 = 200;
/// Issuers rated below this cannot create instruments
pub const MIN_ISSUER_RATING: u32 = 3;

/// Authoritative lifecycle record of one receivable, owned by the factory.
///
/// `invested_amount == 0` means the instrument is still unsold; once a
/// purchase succeeds the amount is fixed forever. `redeemed` flips true
/// exactly once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstrumentRecord {
    /// Sequential id, dense from 0
    pub id: u32,
    /// Creating institution; immutable
    pub issuer: Address,
    /// Payment received at purchase, 0 until then
    pub invested_amount: i128,
    /// True once the payout has been disbursed
    pub redeemed: bool,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Oracle rating frozen at creation, for audit/display only
    pub issuer_rating_at_creation: u32,
}

/// Redeemability verdict with a human-readable reason
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedeemStatus {
    pub redeemable: bool,
    pub reason: String,
}

/// Record projection enriched with live oracle data
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AugmentedInfo {
    pub record: InstrumentRecord,
    pub terms: InstrumentTerms,
    /// Issuer rating as of now (not the frozen creation rating)
    pub current_rating: u32,
    /// Native-asset price feed, staleness surfaced via `is_valid`/`timestamp`
    pub asset_price: PriceData,
    /// What a purchase would cost right now
    pub adjusted_price: i128,
    pub status: RedeemStatus,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Oracle,
    PaymentToken,
    InstrumentToken,
    BaseRiskRate,
    PoolBalance,
    NextId,
    Record(u32),
    AuthorizedIssuer(Address),
    Initialized,
}
