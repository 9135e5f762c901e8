multiversx_sc::imports!();

use crate::{
    access, batch,
    decryption_oracle_proxy,
    errors::*,
    events,
    fhe::{self, CiphertextHandle},
    types::{Batch, DecryptionContext, RevealedTotals},
};

/// Domain tag prefixed to every content-binding preimage.
const CONTENT_HASH_DOMAIN: &[u8] = b"confidential-settlement/decryption/v1";

/// Each cleartext is one 32-byte big-endian word, in handle order.
const CLEARTEXT_WORD_LEN: usize = 32;

/// `[total_shares, total_value]`
const ACCUMULATOR_COUNT: usize = 2;

/// Request/callback bridge to the external decryption oracle.
///
/// A request pins the closed batch's accumulator handles under a content
/// hash. The callback is accepted only if the context is still pending, the
/// hash still matches the batch, and the oracle vouches for the cleartexts.
#[multiversx_sc::module]
pub trait DecryptionModule:
    access::AccessModule + fhe::FheModule + batch::BatchModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: requestDecryption
    // ========================================================

    #[endpoint(requestDecryption)]
    fn request_decryption(&self, batch_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_admin();
        self.require_not_paused();
        self.require_decryption_cooldown(&caller);

        let batch = self.require_closed_batch(batch_id);
        require!(self.revealed_totals(batch_id).is_empty(), ERR_ALREADY_REVEALED);
        let handles = self.accumulator_handles(&batch);
        let content_hash = self.content_hash(&handles);

        let oracle = self.decryption_oracle().get();
        let request_id: u64 = self
            .tx()
            .to(&oracle)
            .typed(decryption_oracle_proxy::DecryptionOracleProxy)
            .request_decryption(handles)
            .returns(ReturnsResult)
            .sync_call();

        require!(
            self.decryption_contexts(request_id).is_empty(),
            ERR_REQUEST_ID_REUSED
        );

        let now = self.blockchain().get_block_timestamp();
        self.decryption_contexts(request_id).set(DecryptionContext {
            batch_id,
            content_hash: content_hash.clone(),
            processed: false,
            requested_at: now,
        });
        self.batch_decryption_requests(batch_id).push(&request_id);
        self.last_decryption_request(&caller).set(now);

        self.decryption_requested_event(request_id, batch_id, &content_hash);

        request_id
    }

    // ========================================================
    // ENDPOINT: onDecryptionCallback
    // Delivered by the oracle, possibly more than once.
    // ========================================================

    /// A `false` from the oracle's `verifyDecryption` fails with
    /// `DecryptionFailed`. If the verification call itself fails, the
    /// transaction aborts with the oracle's own error message instead.
    #[endpoint(onDecryptionCallback)]
    fn on_decryption_callback(
        &self,
        request_id: u64,
        cleartexts: ManagedBuffer,
        proof: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.oracle_callback_caller().get(),
            ERR_NOT_ORACLE
        );
        self.require_not_paused();

        // ── Replay guard ──
        let context_mapper = self.decryption_contexts(request_id);
        require!(!context_mapper.is_empty(), ERR_UNKNOWN_REQUEST);
        let mut context = context_mapper.get();
        require!(!context.processed, ERR_REPLAY);

        // ── Existence guard ──
        let batch = self.require_existing_batch(context.batch_id);
        require!(
            self.revealed_totals(context.batch_id).is_empty(),
            ERR_ALREADY_REVEALED
        );

        // ── Integrity guard ──
        // Closed batches cannot change, so this only trips on a bug that
        // lets accumulators move after the request.
        let handles = self.accumulator_handles(&batch);
        require!(
            self.content_hash(&handles) == context.content_hash,
            ERR_STATE_MISMATCH
        );

        // ── Proof guard ──
        let oracle = self.decryption_oracle().get();
        let verified: bool = self
            .tx()
            .to(&oracle)
            .typed(decryption_oracle_proxy::DecryptionOracleProxy)
            .verify_decryption(request_id, cleartexts.clone(), proof)
            .returns(ReturnsResult)
            .sync_call();
        require!(verified, ERR_PROOF_REJECTED);

        let (total_shares, total_value) = self.decode_totals(&cleartexts);

        context.processed = true;
        context_mapper.set(&context);

        let now = self.blockchain().get_block_timestamp();
        self.revealed_totals(context.batch_id).set(RevealedTotals {
            request_id,
            total_shares: total_shares.clone(),
            total_value: total_value.clone(),
            revealed_at: now,
        });

        self.decryption_completed_event(request_id, context.batch_id, &total_shares, &total_value);
    }

    // ========================================================
    // ENDPOINT: expireDecryptionRequest
    // Closes out a request the oracle never answered. A late callback
    // for it is then rejected as a replay.
    // ========================================================

    #[endpoint(expireDecryptionRequest)]
    fn expire_decryption_request(&self, request_id: u64) {
        self.require_admin();
        self.require_not_paused();

        let context_mapper = self.decryption_contexts(request_id);
        require!(!context_mapper.is_empty(), ERR_UNKNOWN_REQUEST);
        let mut context = context_mapper.get();
        require!(!context.processed, ERR_REPLAY);

        let now = self.blockchain().get_block_timestamp();
        let deadline = context
            .requested_at
            .saturating_add(self.decryption_timeout().get());
        require!(deadline <= now, ERR_REQUEST_NOT_EXPIRED);

        context.processed = true;
        context_mapper.set(&context);

        self.decryption_expired_event(request_id, context.batch_id);
    }

    // ========================================================
    // ENDPOINTS: oracle integration config (admin only)
    // ========================================================

    #[endpoint(setDecryptionOracle)]
    fn set_decryption_oracle(&self, oracle: ManagedAddress) {
        self.require_admin();
        require!(!oracle.is_zero(), ERR_ZERO_ADDRESS);

        self.decryption_oracle().set(&oracle);
        self.decryption_oracle_changed_event(&oracle);
    }

    #[endpoint(setOracleCallbackCaller)]
    fn set_oracle_callback_caller(&self, callback_caller: ManagedAddress) {
        self.require_admin();
        require!(!callback_caller.is_zero(), ERR_ZERO_ADDRESS);

        self.oracle_callback_caller().set(&callback_caller);
        self.oracle_callback_caller_changed_event(&callback_caller);
    }

    #[endpoint(setDecryptionTimeout)]
    fn set_decryption_timeout(&self, seconds: u64) {
        self.require_admin();

        let previous_seconds = self.decryption_timeout().get();
        self.decryption_timeout().set(seconds);

        self.decryption_timeout_changed_event(previous_seconds, seconds);
    }

    // ========================================================
    // INTERNAL: content binding
    // ========================================================

    fn accumulator_handles(
        &self,
        batch: &Batch<Self::Api>,
    ) -> ManagedVec<CiphertextHandle<Self::Api>> {
        let mut handles = ManagedVec::new();
        handles.push(batch.total_shares.handle().clone());
        handles.push(batch.total_value.handle().clone());
        handles
    }

    /// keccak256(domain ‖ handles ‖ ledger address)
    fn content_hash(
        &self,
        handles: &ManagedVec<CiphertextHandle<Self::Api>>,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut preimage = ManagedBuffer::new_from_bytes(CONTENT_HASH_DOMAIN);
        for handle in handles.iter() {
            preimage.append(handle.as_managed_buffer());
        }
        preimage.append(self.blockchain().get_sc_address().as_managed_buffer());

        self.crypto().keccak256(&preimage)
    }

    fn decode_totals(&self, cleartexts: &ManagedBuffer) -> (BigUint, BigUint) {
        require!(
            cleartexts.len() == CLEARTEXT_WORD_LEN * ACCUMULATOR_COUNT,
            ERR_MALFORMED_CLEARTEXTS
        );

        let total_shares = self.decode_cleartext_word(cleartexts, 0);
        let total_value = self.decode_cleartext_word(cleartexts, 1);
        (total_shares, total_value)
    }

    fn decode_cleartext_word(&self, cleartexts: &ManagedBuffer, index: usize) -> BigUint {
        match cleartexts.copy_slice(index * CLEARTEXT_WORD_LEN, CLEARTEXT_WORD_LEN) {
            Some(word) => BigUint::from_bytes_be_buffer(&word),
            None => sc_panic!(ERR_MALFORMED_CLEARTEXTS),
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDecryptionContext)]
    fn get_decryption_context(&self, request_id: u64) -> DecryptionContext<Self::Api> {
        require!(
            !self.decryption_contexts(request_id).is_empty(),
            ERR_UNKNOWN_REQUEST
        );
        self.decryption_contexts(request_id).get()
    }

    #[view(getBatchDecryptionRequests)]
    fn get_batch_decryption_requests(&self, batch_id: u64) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for request_id in self.batch_decryption_requests(batch_id).iter() {
            result.push(request_id);
        }
        result
    }

    #[view(getRevealedTotals)]
    fn get_revealed_totals(&self, batch_id: u64) -> RevealedTotals<Self::Api> {
        require!(
            !self.revealed_totals(batch_id).is_empty(),
            ERR_NOT_REVEALED
        );
        self.revealed_totals(batch_id).get()
    }

    /// Lets auditors recompute the binding a pending request was issued under.
    #[view(getBatchContentHash)]
    fn get_batch_content_hash(&self, batch_id: u64) -> ManagedByteArray<Self::Api, 32> {
        let batch = self.require_existing_batch(batch_id);
        let handles = self.accumulator_handles(&batch);
        self.content_hash(&handles)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getDecryptionOracle)]
    #[storage_mapper("decryptionOracle")]
    fn decryption_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getOracleCallbackCaller)]
    #[storage_mapper("oracleCallbackCaller")]
    fn oracle_callback_caller(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getDecryptionTimeout)]
    #[storage_mapper("decryptionTimeout")]
    fn decryption_timeout(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("decryptionContexts")]
    fn decryption_contexts(&self, request_id: u64)
        -> SingleValueMapper<DecryptionContext<Self::Api>>;

    #[storage_mapper("batchDecryptionRequests")]
    fn batch_decryption_requests(&self, batch_id: u64) -> VecMapper<u64>;

    #[storage_mapper("revealedTotals")]
    fn revealed_totals(&self, batch_id: u64) -> SingleValueMapper<RevealedTotals<Self::Api>>;
}
