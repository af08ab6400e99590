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
    // FEED ERRORS (10-19)
    // ============================================
    /// Rating above the [0, 10] scale
    InvalidRating = 10,
    /// Price must be positive
    InvalidPrice = 11,
}
