use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct MintEvent {
    pub id: u32,
    pub to: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferEvent {
    pub id: u32,
    pub from: Address,
    pub to: Address,
}
