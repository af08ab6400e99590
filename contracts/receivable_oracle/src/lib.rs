#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::{PaidStatus, PriceData, RateData, RatingData, RATING_CEILING};

use events::{
    AssetPriceUpdatedEvent, InflationRateUpdatedEvent, MarketRateUpdatedEvent,
    PaidStatusUpdatedEvent, RatingUpdatedEvent,
};
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct ReceivableOracle;

#[contractimpl]
impl ReceivableOracle {
    /// Initialize the oracle contract
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);

        Ok(())
    }

    // ============================================
    // FEED UPDATES (admin only)
    // ============================================

    /// Set an issuer's creditworthiness rating
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidRating`: Rating above the [0, 10] scale
    pub fn set_rating(env: Env, issuer: Address, rating: u32) -> Result<(), Error> {
        Self::require_admin(&env)?;

        if rating > RATING_CEILING {
            return Err(Error::InvalidRating);
        }

        let timestamp = env.ledger().timestamp();
        env.storage().instance().set(
            &DataKey::Rating(issuer.clone()),
            &RatingData {
                rating,
                updated_at: timestamp,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "rating_updated"), issuer.clone()),
            RatingUpdatedEvent {
                issuer,
                rating,
                timestamp,
            },
        );

        Ok(())
    }

    /// Set the native-asset price feed
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidPrice`: Price must be positive
    pub fn set_asset_price(env: Env, price: i128) -> Result<(), Error> {
        Self::require_admin(&env)?;

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let timestamp = env.ledger().timestamp();
        env.storage().instance().set(
            &DataKey::AssetPrice,
            &PriceData {
                price,
                timestamp,
                is_valid: true,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "price_updated"),),
            AssetPriceUpdatedEvent { price, timestamp },
        );

        Ok(())
    }

    /// Set the market interest rate in basis points
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_market_rate(env: Env, rate_bps: u32) -> Result<(), Error> {
        Self::require_admin(&env)?;

        let timestamp = env.ledger().timestamp();
        env.storage().instance().set(
            &DataKey::MarketRate,
            &RateData {
                rate_bps,
                updated_at: timestamp,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "market_rate_updated"),),
            MarketRateUpdatedEvent { rate_bps, timestamp },
        );

        Ok(())
    }

    /// Set the inflation rate in basis points
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_inflation_rate(env: Env, rate_bps: u32) -> Result<(), Error> {
        Self::require_admin(&env)?;

        let timestamp = env.ledger().timestamp();
        env.storage().instance().set(
            &DataKey::InflationRate,
            &RateData {
                rate_bps,
                updated_at: timestamp,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "inflation_rate_updated"),),
            InflationRateUpdatedEvent { rate_bps, timestamp },
        );

        Ok(())
    }

    /// Flag an instrument as paid (or unpaid) through an off-chain channel
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_paid_offchain(env: Env, id: u32, paid: bool) -> Result<(), Error> {
        Self::require_admin(&env)?;

        let timestamp = env.ledger().timestamp();
        env.storage().instance().set(
            &DataKey::PaidOffchain(id),
            &PaidStatus {
                paid,
                updated_at: timestamp,
            },
        );

        env.events().publish(
            (Symbol::new(&env, "paid_status_updated"), id),
            PaidStatusUpdatedEvent { id, paid, timestamp },
        );

        Ok(())
    }

    // ============================================
    // READ SURFACE (consumed by the ledger)
    // ============================================

    /// Get an issuer's rating; 0 if never set
    pub fn get_rating(env: Env, issuer: Address) -> u32 {
        Self::get_rating_data(env, issuer).rating
    }

    /// Get an issuer's rating with its freshness timestamp
    pub fn get_rating_data(env: Env, issuer: Address) -> RatingData {
        env.storage()
            .instance()
            .get::<DataKey, RatingData>(&DataKey::Rating(issuer))
            .unwrap_or(RatingData {
                rating: 0,
                updated_at: 0,
            })
    }

    /// Get the native-asset price; `is_valid` is false until first populated
    pub fn get_asset_price(env: Env) -> PriceData {
        env.storage()
            .instance()
            .get::<DataKey, PriceData>(&DataKey::AssetPrice)
            .unwrap_or(PriceData {
                price: 0,
                timestamp: 0,
                is_valid: false,
            })
    }

    /// Get the market interest rate in basis points
    pub fn get_market_rate(env: Env) -> RateData {
        env.storage()
            .instance()
            .get::<DataKey, RateData>(&DataKey::MarketRate)
            .unwrap_or(RateData {
                rate_bps: 0,
                updated_at: 0,
            })
    }

    /// Get the inflation rate in basis points
    pub fn get_inflation_rate(env: Env) -> RateData {
        env.storage()
            .instance()
            .get::<DataKey, RateData>(&DataKey::InflationRate)
            .unwrap_or(RateData {
                rate_bps: 0,
                updated_at: 0,
            })
    }

    /// Whether an instrument was confirmed paid out of band
    pub fn is_paid_offchain(env: Env, id: u32) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, PaidStatus>(&DataKey::PaidOffchain(id))
            .map(|s| s.paid)
            .unwrap_or(false)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_admin(env: &Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }
}
