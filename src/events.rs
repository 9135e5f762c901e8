multiversx_sc::imports!();

use crate::fhe::Euint64;

/// Audit log of the ledger. Every state transition emits exactly one of
/// these; payloads carry handles and hashes, never contribution plaintext.
#[multiversx_sc::module]
pub trait EventsModule {
    // ── Access & pause ──

    #[event("adminTransferred")]
    fn admin_transferred_event(
        &self,
        #[indexed] previous_admin: &ManagedAddress,
        #[indexed] new_admin: &ManagedAddress,
    );

    #[event("contributorEligibility")]
    fn contributor_eligibility_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] allowed: bool,
    );

    #[event("pausedChanged")]
    fn paused_changed_event(&self, #[indexed] paused: bool);

    #[event("cooldownChanged")]
    fn cooldown_changed_event(
        &self,
        #[indexed] previous_seconds: u64,
        #[indexed] new_seconds: u64,
    );

    // ── Integration config ──

    #[event("fheExecutorChanged")]
    fn fhe_executor_changed_event(&self, #[indexed] executor: &ManagedAddress);

    #[event("decryptionOracleChanged")]
    fn decryption_oracle_changed_event(&self, #[indexed] oracle: &ManagedAddress);

    #[event("oracleCallbackCallerChanged")]
    fn oracle_callback_caller_changed_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("decryptionTimeoutChanged")]
    fn decryption_timeout_changed_event(
        &self,
        #[indexed] previous_seconds: u64,
        #[indexed] new_seconds: u64,
    );

    // ── Batches ──

    #[event("batchOpened")]
    fn batch_opened_event(&self, #[indexed] batch_id: u64, #[indexed] opened_at: u64);

    #[event("batchClosed")]
    fn batch_closed_event(
        &self,
        #[indexed] batch_id: u64,
        #[indexed] total_shares: &Euint64<Self::Api>,
        #[indexed] total_value: &Euint64<Self::Api>,
    );

    #[event("contributionSubmitted")]
    fn contribution_submitted_event(
        &self,
        #[indexed] batch_id: u64,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] shares: &Euint64<Self::Api>,
        #[indexed] price_per_share: &Euint64<Self::Api>,
    );

    // ── Decryption ──

    #[event("decryptionRequested")]
    fn decryption_requested_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] batch_id: u64,
        #[indexed] content_hash: &ManagedByteArray<Self::Api, 32>,
    );

    #[event("decryptionCompleted")]
    fn decryption_completed_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] batch_id: u64,
        #[indexed] total_shares: &BigUint,
        total_value: &BigUint,
    );

    #[event("decryptionExpired")]
    fn decryption_expired_event(&self, #[indexed] request_id: u64, #[indexed] batch_id: u64);
}
