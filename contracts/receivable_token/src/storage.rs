use soroban_sdk::{contracttype, Address, String};

/// Static terms of one tokenized receivable, fixed at mint time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstrumentTerms {
    /// Display name of the instrument
    pub name: String,
    /// Ticker-style symbol
    pub symbol: String,
    /// Display name of the issuing institution
    pub issuer_name: String,
    /// Purchase price the investor pays
    pub discount_value: i128,
    /// Amount the holder receives at redemption (must exceed discount_value)
    pub face_value: i128,
    /// Unix timestamp at which the receivable falls due
    pub maturity: u64,
}

/// One instrument: its terms plus the single ownership unit.
///
/// Exactly one indivisible unit exists per id. It is minted to the factory
/// and transferred once to the buyer; it is never re-minted, split or burned.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Instrument {
    pub terms: InstrumentTerms,
    pub holder: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Operators(Address),
    Instrument(u32),
    Initialized,
}
