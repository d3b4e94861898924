//! Transaction builders for the burn and claim sides of a transfer

mod burn;
mod claim;

pub use burn::{BurnRequest, BurnTransactionBuilder, MAX_FAST_TRANSFER_FEE};
pub use claim::ClaimTransactionBuilder;
