#![no_std]

mod error;
mod events;
mod pricing;
mod storage;

pub use error::Error;
pub use storage::{AugmentedInfo, InstrumentRecord, RedeemStatus};

use events::*;
use storage::{DataKey, DEFAULT_RISK_RATE_BPS, MAX_RISK_RATE_BPS, MIN_ISSUER_RATING};

use receivable_oracle::ReceivableOracleClient;
use receivable_token::{InstrumentTerms, ReceivableTokenClient};
use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, String, Symbol};

#[contract]
pub struct ReceivableFactory;

#[contractimpl]
impl ReceivableFactory {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the factory
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        payment_token: Address,
        instrument_token: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage()
            .instance()
            .set(&DataKey::InstrumentToken, &instrument_token);
        env.storage()
            .instance()
            .set(&DataKey::BaseRiskRate, &DEFAULT_RISK_RATE_BPS);
        env.storage().instance().set(&DataKey::PoolBalance, &0i128);
        env.storage().instance().set(&DataKey::NextId, &0u32);

        Ok(())
    }

    /// Point the factory at a new oracle
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn set_oracle(env: Env, oracle: Address) -> Result<(), Error> {
        Self::require_admin(&env)?;

        env.storage().instance().set(&DataKey::Oracle, &oracle);

        env.events().publish(
            (Symbol::new(&env, "oracle_updated"),),
            OracleUpdatedEvent { oracle },
        );

        Ok(())
    }

    /// Set the base risk rate in basis points
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `RateTooHigh`: Rate above the 10% bound
    pub fn set_base_risk_rate(env: Env, rate_bps: u32) -> Result<(), Error> {
        Self::require_admin(&env)?;

        if rate_bps > MAX_RISK_RATE_BPS {
            return Err(Error::RateTooHigh);
        }

        env.storage().instance().set(&DataKey::BaseRiskRate, &rate_bps);

        env.events().publish(
            (Symbol::new(&env, "risk_rate_updated"),),
            RiskRateUpdatedEvent { rate_bps },
        );

        Ok(())
    }

    /// Credit the shared redemption pool (owner deposit)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount must be positive
    /// - `AmountOverflow`: Pool balance would overflow
    pub fn fund_pool(env: Env, amount: i128) -> Result<(), Error> {
        let admin = Self::require_admin(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let payments = Self::payment_client(&env)?;
        payments.transfer(&admin, &env.current_contract_address(), &amount);

        let balance = Self::pool_balance(&env)
            .checked_add(amount)
            .ok_or(Error::AmountOverflow)?;
        env.storage().instance().set(&DataKey::PoolBalance, &balance);

        env.events().publish(
            (Symbol::new(&env, "pool_funded"),),
            PoolFundedEvent { amount, balance },
        );

        Ok(())
    }

    /// Withdraw uncommitted pool funds back to the owner
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount must be positive
    /// - `InsufficientPoolFunds`: Amount exceeds the pool balance
    pub fn withdraw_pool(env: Env, amount: i128) -> Result<(), Error> {
        let admin = Self::require_admin(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let pool = Self::pool_balance(&env);
        if pool < amount {
            return Err(Error::InsufficientPoolFunds);
        }

        let balance = pool - amount;
        env.storage().instance().set(&DataKey::PoolBalance, &balance);

        let payments = Self::payment_client(&env)?;
        payments.transfer(&env.current_contract_address(), &admin, &amount);

        env.events().publish(
            (Symbol::new(&env, "pool_withdrawn"),),
            PoolWithdrawnEvent { amount, balance },
        );

        Ok(())
    }

    // ============================================
    // ISSUER REGISTRY
    // ============================================

    /// Add an issuer to the allow-list; authorizing twice is a no-op
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn authorize_issuer(env: Env, issuer: Address) -> Result<(), Error> {
        Self::require_admin(&env)?;

        env.storage()
            .instance()
            .set(&DataKey::AuthorizedIssuer(issuer.clone()), &true);

        env.events().publish(
            (Symbol::new(&env, "issuer_authorized"), issuer.clone()),
            IssuerAuthorizedEvent { issuer },
        );

        Ok(())
    }

    /// Remove an issuer from the allow-list
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn revoke_issuer(env: Env, issuer: Address) -> Result<(), Error> {
        Self::require_admin(&env)?;

        env.storage()
            .instance()
            .remove(&DataKey::AuthorizedIssuer(issuer.clone()));

        env.events().publish(
            (Symbol::new(&env, "issuer_revoked"), issuer.clone()),
            IssuerRevokedEvent { issuer },
        );

        Ok(())
    }

    /// Check if an issuer may create instruments
    pub fn is_issuer_authorized(env: Env, issuer: Address) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::AuthorizedIssuer(issuer))
            .unwrap_or(false)
    }

    // ============================================
    // LIFECYCLE: CREATE
    // ============================================

    /// Create a new receivable instrument
    ///
    /// Mints the single ownership unit to the factory and appends the
    /// authoritative record, freezing the issuer's current rating for audit.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `IssuerNotAuthorized`: Issuer not on the allow-list
    /// - `RatingTooLow`: Oracle rating below the creation threshold
    /// - `InvalidAmount`: Negative discount value
    /// - `MaturityInPast`: Maturity not in the future
    /// - `FaceValueTooLow`: Face value does not exceed the discount
    #[allow(clippy::too_many_arguments)]
    pub fn create_receivable(
        env: Env,
        issuer: Address,
        name: String,
        symbol: String,
        issuer_name: String,
        discount_value: i128,
        face_value: i128,
        maturity: u64,
    ) -> Result<u32, Error> {
        Self::check_initialized(&env)?;

        issuer.require_auth();

        if !Self::is_issuer_authorized(env.clone(), issuer.clone()) {
            return Err(Error::IssuerNotAuthorized);
        }

        let oracle = Self::oracle_client(&env)?;
        let rating = oracle.get_rating(&issuer);
        if rating < MIN_ISSUER_RATING {
            return Err(Error::RatingTooLow);
        }

        if discount_value < 0 {
            return Err(Error::InvalidAmount);
        }
        if maturity <= env.ledger().timestamp() {
            return Err(Error::MaturityInPast);
        }
        if face_value <= discount_value {
            return Err(Error::FaceValueTooLow);
        }

        let id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::NextId)
            .unwrap_or(0u32);

        let instruments = Self::instrument_client(&env)?;
        let this = env.current_contract_address();
        instruments.mint(
            &this,
            &id,
            &this,
            &InstrumentTerms {
                name,
                symbol,
                issuer_name,
                discount_value,
                face_value,
                maturity,
            },
        );

        let record = InstrumentRecord {
            id,
            issuer: issuer.clone(),
            invested_amount: 0,
            redeemed: false,
            created_at: env.ledger().timestamp(),
            issuer_rating_at_creation: rating,
        };
        env.storage().instance().set(&DataKey::Record(id), &record);
        env.storage().instance().set(&DataKey::NextId, &(id + 1));

        env.events().publish(
            (Symbol::new(&env, "created"), id),
            CreatedEvent {
                id,
                issuer,
                rating,
                discount_value,
                face_value,
                maturity,
            },
        );

        Ok(id)
    }

    // ============================================
    // LIFECYCLE: PURCHASE
    // ============================================

    /// Buy an unsold instrument at the current risk-adjusted price
    ///
    /// The payment goes straight to the issuer; the pool is only touched at
    /// redemption. Exactly one purchase can ever succeed per instrument.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `UnknownInstrument`: No record with this id
    /// - `AlreadyRedeemed`: Instrument already redeemed
    /// - `AlreadyInvested`: Instrument already has an investor
    /// - `IncorrectPayment`: Payment differs from the adjusted price
    /// - `AmountOverflow`: Price computation overflowed
    pub fn purchase(env: Env, buyer: Address, id: u32, payment: i128) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        buyer.require_auth();

        let mut record = Self::record(&env, id)?;
        if record.redeemed {
            return Err(Error::AlreadyRedeemed);
        }
        if record.invested_amount != 0 {
            return Err(Error::AlreadyInvested);
        }

        let instruments = Self::instrument_client(&env)?;
        let this = env.current_contract_address();
        // A zero-discount instrument records a zero investment, so the
        // holder is the authoritative already-sold check
        if instruments.holder_of(&id) != this {
            return Err(Error::AlreadyInvested);
        }

        let terms = instruments.get_terms(&id);
        let oracle = Self::oracle_client(&env)?;
        let rating = oracle.get_rating(&record.issuer);
        let rate_bps = Self::base_risk_rate(env.clone());

        let adjusted =
            pricing::compute_adjusted_price(terms.discount_value, rating, rate_bps, terms.face_value)
                .ok_or(Error::AmountOverflow)?;
        if payment != adjusted {
            return Err(Error::IncorrectPayment);
        }

        // Issuer is paid at sale time
        if payment > 0 {
            let payments = Self::payment_client(&env)?;
            payments.transfer(&buyer, &record.issuer, &payment);
        }

        instruments.transfer(&id, &this, &buyer);

        record.invested_amount = payment;
        env.storage().instance().set(&DataKey::Record(id), &record);

        env.events().publish(
            (Symbol::new(&env, "purchased"), id, buyer.clone()),
            PurchasedEvent {
                id,
                buyer,
                amount: payment,
                rating,
                base_risk_rate_bps: rate_bps,
            },
        );

        Ok(())
    }

    // ============================================
    // LIFECYCLE: REDEEM
    // ============================================

    /// Disburse the payout for a matured (or off-chain-paid) instrument
    ///
    /// Callable by anyone; the payout always goes to the current holder of
    /// the ownership unit. The pool is debited by exactly the payout, once.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `UnknownInstrument`: No record with this id
    /// - `AlreadyRedeemed`: Instrument already redeemed
    /// - `NotInvested`: Instrument was never purchased
    /// - `NotDueYet`: Neither matured nor confirmed paid off-chain
    /// - `AmountOverflow`: Payout computation overflowed
    /// - `InsufficientPoolFunds`: Pool cannot cover the payout
    pub fn redeem(env: Env, id: u32) -> Result<i128, Error> {
        Self::check_initialized(&env)?;

        let mut record = Self::record(&env, id)?;
        if record.redeemed {
            return Err(Error::AlreadyRedeemed);
        }
        if record.invested_amount == 0 {
            return Err(Error::NotInvested);
        }

        let instruments = Self::instrument_client(&env)?;
        let terms = instruments.get_terms(&id);

        let matured = env.ledger().timestamp() >= terms.maturity;
        let oracle = Self::oracle_client(&env)?;
        let paid_offchain = oracle.is_paid_offchain(&id);
        if !matured && !paid_offchain {
            return Err(Error::NotDueYet);
        }

        let payout =
            pricing::compute_payout(terms.face_value, record.invested_amount, terms.discount_value)
                .ok_or(Error::AmountOverflow)?;

        let pool = Self::pool_balance(&env);
        if pool < payout {
            return Err(Error::InsufficientPoolFunds);
        }

        let holder = instruments.holder_of(&id);

        env.storage()
            .instance()
            .set(&DataKey::PoolBalance, &(pool - payout));

        let payments = Self::payment_client(&env)?;
        payments.transfer(&env.current_contract_address(), &holder, &payout);

        record.redeemed = true;
        env.storage().instance().set(&DataKey::Record(id), &record);

        let early = !matured;
        env.events().publish(
            (Symbol::new(&env, "redeemed"), id),
            RedeemedEvent {
                id,
                holder,
                payout,
                early,
                reason: if early {
                    symbol_short!("paid_off")
                } else {
                    symbol_short!("matured")
                },
            },
        );

        Ok(payout)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Current balance of the shared redemption pool
    pub fn get_balance(env: Env) -> i128 {
        Self::pool_balance(&env)
    }

    /// Current base risk rate in basis points
    pub fn base_risk_rate(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::BaseRiskRate)
            .unwrap_or(DEFAULT_RISK_RATE_BPS)
    }

    /// Id the next created instrument will receive
    pub fn next_id(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::NextId)
            .unwrap_or(0u32)
    }

    /// Get the raw lifecycle record
    ///
    /// # Errors
    /// - `UnknownInstrument`: No record with this id
    pub fn get_record(env: Env, id: u32) -> Result<InstrumentRecord, Error> {
        Self::record(&env, id)
    }

    /// Redeemability verdict with a human-readable reason
    ///
    /// # Errors
    /// - `UnknownInstrument`: No record with this id
    pub fn can_redeem(env: Env, id: u32) -> Result<RedeemStatus, Error> {
        Self::check_initialized(&env)?;

        let record = Self::record(&env, id)?;
        let instruments = Self::instrument_client(&env)?;
        let terms = instruments.get_terms(&id);

        Ok(Self::redeem_status(&env, &record, &terms))
    }

    /// Record projection enriched with live oracle data
    ///
    /// Never fails for a valid id: stale or unpopulated oracle feeds are
    /// surfaced through their validity flags and timestamps, not hidden.
    ///
    /// # Errors
    /// - `UnknownInstrument`: No record with this id
    pub fn get_augmented_info(env: Env, id: u32) -> Result<AugmentedInfo, Error> {
        Self::check_initialized(&env)?;

        let record = Self::record(&env, id)?;
        let instruments = Self::instrument_client(&env)?;
        let terms = instruments.get_terms(&id);

        let oracle = Self::oracle_client(&env)?;
        let current_rating = oracle.get_rating(&record.issuer);
        let asset_price = oracle.get_asset_price();

        let adjusted_price = pricing::compute_adjusted_price(
            terms.discount_value,
            current_rating,
            Self::base_risk_rate(env.clone()),
            terms.face_value,
        )
        .unwrap_or(terms.discount_value);

        let status = Self::redeem_status(&env, &record, &terms);

        Ok(AugmentedInfo {
            record,
            terms,
            current_rating,
            asset_price,
            adjusted_price,
            status,
        })
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_initialized(env: &Env) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env) -> Result<Address, Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();
        Ok(admin)
    }

    fn record(env: &Env, id: u32) -> Result<InstrumentRecord, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Record(id))
            .ok_or(Error::UnknownInstrument)
    }

    fn pool_balance(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::PoolBalance)
            .unwrap_or(0i128)
    }

    fn oracle_client(env: &Env) -> Result<ReceivableOracleClient, Error> {
        let oracle: Address = env
            .storage()
            .instance()
            .get(&DataKey::Oracle)
            .ok_or(Error::NotInitialized)?;
        Ok(ReceivableOracleClient::new(env, &oracle))
    }

    fn instrument_client(env: &Env) -> Result<ReceivableTokenClient, Error> {
        let token: Address = env
            .storage()
            .instance()
            .get(&DataKey::InstrumentToken)
            .ok_or(Error::NotInitialized)?;
        Ok(ReceivableTokenClient::new(env, &token))
    }

    fn payment_client(env: &Env) -> Result<token::Client, Error> {
        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(Error::NotInitialized)?;
        Ok(token::Client::new(env, &payment_token))
    }

    /// Mirror of what `redeem` would decide right now, scarcity included
    fn redeem_status(env: &Env, record: &InstrumentRecord, terms: &InstrumentTerms) -> RedeemStatus {
        if record.redeemed {
            return RedeemStatus {
                redeemable: false,
                reason: String::from_str(env, "already redeemed"),
            };
        }
        if record.invested_amount == 0 {
            return RedeemStatus {
                redeemable: false,
                reason: String::from_str(env, "not yet purchased"),
            };
        }

        let matured = env.ledger().timestamp() >= terms.maturity;
        let paid_offchain = match Self::oracle_client(env) {
            Ok(oracle) => oracle.is_paid_offchain(&record.id),
            Err(_) => false,
        };
        if !matured && !paid_offchain {
            return RedeemStatus {
                redeemable: false,
                reason: String::from_str(env, "not due yet"),
            };
        }

        let payout = match pricing::compute_payout(
            terms.face_value,
            record.invested_amount,
            terms.discount_value,
        ) {
            Some(p) => p,
            None => {
                return RedeemStatus {
                    redeemable: false,
                    reason: String::from_str(env, "payout not computable"),
                }
            }
        };
        if Self::pool_balance(env) < payout {
            return RedeemStatus {
                redeemable: false,
                reason: String::from_str(env, "pool balance below payout"),
            };
        }

        RedeemStatus {
            redeemable: true,
            reason: if matured {
                String::from_str(env, "matured")
            } else {
                String::from_str(env, "paid off-chain")
            },
        }
    }
}
