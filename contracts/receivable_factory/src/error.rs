use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller not authorized for an owner-gated operation
    Unauthorized = 10,
    /// Issuer is not on the allow-list
    IssuerNotAuthorized = 11,
    /// Issuer's oracle rating is below the creation threshold
    RatingTooLow = 12,

    // ============================================
    // CREATION ERRORS (20-29)
    // ============================================
    /// Maturity timestamp is not in the future
    MaturityInPast = 20,
    /// Face value must exceed the discount value
    FaceValueTooLow = 21,
    /// Amount must be positive (or non-negative where zero is allowed)
    InvalidAmount = 22,

    // ============================================
    // PURCHASE ERRORS (30-39)
    // ============================================
    /// No instrument with this id
    UnknownInstrument = 30,
    /// Instrument already has an investor
    AlreadyInvested = 31,
    /// Payment does not match the adjusted price exactly
    IncorrectPayment = 32,

    // ============================================
    // REDEMPTION ERRORS (40-49)
    // ============================================
    /// Instrument was already redeemed
    AlreadyRedeemed = 40,
    /// Neither matured nor confirmed paid off-chain
    NotDueYet = 41,
    /// Instrument was never purchased
    NotInvested = 42,
    /// Shared pool cannot cover the payout
    InsufficientPoolFunds = 43,

    // ============================================
    // ADMIN/ARITHMETIC ERRORS (50-59)
    // ============================================
    /// Base risk rate above the 10% bound
    RateTooHigh = 50,
    /// Checked arithmetic overflowed
    AmountOverflow = 51,
}
