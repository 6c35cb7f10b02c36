//! Web3 account information carried on user snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Web3 accounts associated with a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeb3Info {
    /// The user's on-chain accounts.
    pub accounts: Vec<UserWeb3Account>,
}

/// A single on-chain account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWeb3Account {
    /// The account address.
    pub account_identifier: Web3AccountIdentifier,
    /// The network the account lives on.
    pub network_identifier: Web3NetworkIdentifier,
    /// NFTs held by the account.
    pub nfts: Vec<Web3Nft>,
}

/// An on-chain account address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3AccountIdentifier {
    pub address: String,
}

/// A blockchain network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3NetworkIdentifier {
    pub blockchain: String,
    pub network: String,
}

/// An NFT contract and the tokens held under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3Nft {
    pub contract: Web3NftContract,
    pub tokens: Vec<Web3NftToken>,
}

/// An NFT contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3NftContract {
    pub name: String,
    pub address: String,
}

/// A single NFT token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3NftToken {
    pub token_id: String,
    pub transaction_identifier: Web3TransactionIdentifier,
    pub block_identifier: Web3BlockIdentifier,
    pub balance: String,
}

/// The transaction that minted or transferred a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3TransactionIdentifier {
    pub hash: String,
}

/// The block a transaction was recorded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Web3BlockIdentifier {
    pub index: u64,
    /// Block time (RFC3339).
    pub timestamp: DateTime<Utc>,
}
