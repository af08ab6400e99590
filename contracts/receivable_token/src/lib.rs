#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::{Instrument, InstrumentTerms};

use events::{MintEvent, TransferEvent};
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

#[contract]
pub struct ReceivableToken;

#[contractimpl]
impl ReceivableToken {
    /// Initialize the token contract
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

    /// Add an operator (the ledger factory contract)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn add_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Operators(operator.clone()), &true);

        Ok(())
    }

    /// Remove an operator
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn remove_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage()
            .instance()
            .remove(&DataKey::Operators(operator));

        Ok(())
    }

    /// Mint the single ownership unit of a new instrument (only operators)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Operator not on the allow-list
    /// - `InstrumentExists`: Instrument id already minted
    pub fn mint(
        env: Env,
        operator: Address,
        id: u32,
        to: Address,
        terms: InstrumentTerms,
    ) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }

        operator.require_auth();
        if !Self::is_operator(env.clone(), operator) {
            return Err(Error::Unauthorized);
        }

        let key = DataKey::Instrument(id);
        if env.storage().instance().has(&key) {
            return Err(Error::InstrumentExists);
        }

        env.storage().instance().set(
            &key,
            &Instrument {
                terms,
                holder: to.clone(),
            },
        );

        env.events().publish(
            (Symbol::new(&env, "mint"), id),
            MintEvent { id, to },
        );

        Ok(())
    }

    /// Transfer the ownership unit between holders
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InstrumentNotFound`: No instrument with this id
    /// - `NotHolder`: From address does not hold the unit
    pub fn transfer(env: Env, id: u32, from: Address, to: Address) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }

        from.require_auth();

        let key = DataKey::Instrument(id);
        let mut instrument = env
            .storage()
            .instance()
            .get::<DataKey, Instrument>(&key)
            .ok_or(Error::InstrumentNotFound)?;

        if instrument.holder != from {
            return Err(Error::NotHolder);
        }

        instrument.holder = to.clone();
        env.storage().instance().set(&key, &instrument);

        env.events().publish(
            (Symbol::new(&env, "transfer"), id),
            TransferEvent { id, from, to },
        );

        Ok(())
    }

    /// Get the current holder of an instrument
    pub fn holder_of(env: Env, id: u32) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get::<DataKey, Instrument>(&DataKey::Instrument(id))
            .map(|i| i.holder)
            .ok_or(Error::InstrumentNotFound)
    }

    /// Get the static terms of an instrument
    pub fn get_terms(env: Env, id: u32) -> Result<InstrumentTerms, Error> {
        env.storage()
            .instance()
            .get::<DataKey, Instrument>(&DataKey::Instrument(id))
            .map(|i| i.terms)
            .ok_or(Error::InstrumentNotFound)
    }

    /// Check if address is an operator
    pub fn is_operator(env: Env, address: Address) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Operators(address))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    fn terms(env: &Env, discount: i128, face: i128, maturity: u64) -> InstrumentTerms {
        InstrumentTerms {
            name: String::from_str(env, "Receivable Test"),
            symbol: String::from_str(env, "REC"),
            issuer_name: String::from_str(env, "Care Home Test"),
            discount_value: discount,
            face_value: face,
            maturity,
        }
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize(&admin);

        let result = client.try_initialize(&admin);
        assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    }

    #[test]
    fn test_operator_management() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let factory = Address::generate(&env);

        client.initialize(&admin);

        assert!(!client.is_operator(&factory));
        client.add_operator(&factory);
        assert!(client.is_operator(&factory));
        client.remove_operator(&factory);
        assert!(!client.is_operator(&factory));
    }

    #[test]
    fn test_mint_and_holder() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let factory = Address::generate(&env);

        client.initialize(&admin);
        client.add_operator(&factory);

        let t = terms(&env, 100, 120, 5000);
        client.mint(&factory, &0, &factory, &t);

        assert_eq!(client.holder_of(&0), factory);
        assert_eq!(client.get_terms(&0), t);
    }

    #[test]
    fn test_mint_requires_operator() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let stranger = Address::generate(&env);

        client.initialize(&admin);

        let t = terms(&env, 100, 120, 5000);
        let result = client.try_mint(&stranger, &0, &stranger, &t);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));
    }

    #[test]
    fn test_mint_duplicate_id() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let factory = Address::generate(&env);

        client.initialize(&admin);
        client.add_operator(&factory);

        let t = terms(&env, 100, 120, 5000);
        client.mint(&factory, &0, &factory, &t);

        let result = client.try_mint(&factory, &0, &factory, &t);
        assert_eq!(result, Err(Ok(Error::InstrumentExists)));
    }

    #[test]
    fn test_transfer_moves_unit() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let factory = Address::generate(&env);
        let investor = Address::generate(&env);

        client.initialize(&admin);
        client.add_operator(&factory);
        client.mint(&factory, &0, &factory, &terms(&env, 100, 120, 5000));

        client.transfer(&0, &factory, &investor);
        assert_eq!(client.holder_of(&0), investor);

        // The previous holder no longer owns the unit
        let result = client.try_transfer(&0, &factory, &investor);
        assert_eq!(result, Err(Ok(Error::NotHolder)));
    }

    #[test]
    fn test_transfer_unknown_instrument() {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ReceivableToken);
        let client = ReceivableTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        client.initialize(&admin);

        let result = client.try_transfer(&7, &a, &b);
        assert_eq!(result, Err(Ok(Error::InstrumentNotFound)));
    }
}
