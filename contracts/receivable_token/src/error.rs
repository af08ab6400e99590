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
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not a registered operator
    Unauthorized = 10,

    // ============================================
    // INSTRUMENT ERRORS (20-29)
    // ============================================
    /// An instrument with this id already exists
    InstrumentExists = 20,
    /// No instrument with this id
    InstrumentNotFound = 21,
    /// Transfer source does not hold the instrument unit
    NotHolder = 22,
}
