multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::fhe::Euint64;

// ============================================================
// Batch: a time-bounded settlement window
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Batch<M: ManagedTypeApi> {
    pub id: u64,
    /// Open → Closed, never back.
    pub is_open: bool,
    /// Σ shares
    pub total_shares: Euint64<M>,
    /// Σ shares · pricePerShare
    pub total_value: Euint64<M>,
    /// Accepted submissions, resubmissions included.
    pub submission_count: u64,
    pub opened_at: u64,
    /// 0 while the batch is open
    pub closed_at: u64,
}

// ============================================================
// Contribution: latest submission of one contributor in one batch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Contribution<M: ManagedTypeApi> {
    pub shares: Euint64<M>,
    pub price_per_share: Euint64<M>,
    pub submitted_at: u64,
}

// ============================================================
// Decryption: pending oracle requests and published results
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct DecryptionContext<M: ManagedTypeApi> {
    pub batch_id: u64,
    /// keccak256 over the accumulator handles and the ledger address,
    /// taken when the request was issued.
    pub content_hash: ManagedByteArray<M, 32>,
    /// Set exactly once, by an accepted callback or by expiry.
    pub processed: bool,
    pub requested_at: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RevealedTotals<M: ManagedTypeApi> {
    pub request_id: u64,
    pub total_shares: BigUint<M>,
    pub total_value: BigUint<M>,
    pub revealed_at: u64,
}
