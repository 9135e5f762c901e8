multiversx_sc::imports!();

use crate::{
    access,
    errors::*,
    events,
    fhe::{self, Euint64},
    types::{Batch, Contribution},
};

/// Batch lifecycle (Open → Closed) and the contribution path that folds
/// encrypted submissions into a batch's accumulators.
#[multiversx_sc::module]
pub trait BatchModule: access::AccessModule + fhe::FheModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: openBatch
    // Several batches may be open at the same time.
    // ========================================================

    #[endpoint(openBatch)]
    fn open_batch(&self) -> u64 {
        self.require_admin();
        self.require_not_paused();

        let batch_id = self.batch_count().get() + 1u64;
        let now = self.blockchain().get_block_timestamp();

        let batch = Batch {
            id: batch_id,
            is_open: true,
            total_shares: self.fhe_as_euint64(0),
            total_value: self.fhe_as_euint64(0),
            submission_count: 0u64,
            opened_at: now,
            closed_at: 0u64,
        };

        self.batches(batch_id).set(&batch);
        self.batch_count().set(batch_id);

        self.batch_opened_event(batch_id, now);

        batch_id
    }

    // ========================================================
    // ENDPOINT: closeBatch
    // The only transition that makes a batch decryptable.
    // ========================================================

    #[endpoint(closeBatch)]
    fn close_batch(&self, batch_id: u64) {
        self.require_admin();
        self.require_not_paused();

        let mut batch = self.require_open_batch(batch_id);
        batch.is_open = false;
        batch.closed_at = self.blockchain().get_block_timestamp();
        self.batches(batch_id).set(&batch);

        self.batch_closed_event(batch_id, &batch.total_shares, &batch.total_value);
    }

    // ========================================================
    // ENDPOINT: submitContribution
    // Resubmitting adds on top of the running totals; the previous
    // contribution of the same caller is not netted out.
    // ========================================================

    #[endpoint(submitContribution)]
    fn submit_contribution(
        &self,
        batch_id: u64,
        shares: Euint64<Self::Api>,
        price_per_share: Euint64<Self::Api>,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_eligible_contributor(&caller);
        self.require_not_paused();
        self.require_submission_cooldown(&caller);

        let mut batch = self.require_open_batch(batch_id);

        let shares = self.fhe_materialize(shares);
        let price_per_share = self.fhe_materialize(price_per_share);
        let now = self.blockchain().get_block_timestamp();

        self.contributions(batch_id, &caller).set(Contribution {
            shares: shares.clone(),
            price_per_share: price_per_share.clone(),
            submitted_at: now,
        });
        self.batch_contributors(batch_id).insert(caller.clone());

        let value = self.fhe_mul(&shares, &price_per_share);
        batch.total_shares = self.fhe_add(&batch.total_shares, &shares);
        batch.total_value = self.fhe_add(&batch.total_value, &value);
        batch.submission_count += 1;
        self.batches(batch_id).set(&batch);

        self.last_submission(&caller).set(now);

        self.contribution_submitted_event(batch_id, &caller, &shares, &price_per_share);
    }

    // ========================================================
    // INTERNAL: lifecycle guards
    // ========================================================

    fn require_existing_batch(&self, batch_id: u64) -> Batch<Self::Api> {
        require!(!self.batches(batch_id).is_empty(), ERR_BATCH_NOT_FOUND);
        self.batches(batch_id).get()
    }

    fn require_open_batch(&self, batch_id: u64) -> Batch<Self::Api> {
        let batch = self.require_existing_batch(batch_id);
        require!(batch.is_open, ERR_BATCH_NOT_OPEN);
        batch
    }

    fn require_closed_batch(&self, batch_id: u64) -> Batch<Self::Api> {
        let batch = self.require_existing_batch(batch_id);
        require!(!batch.is_open, ERR_BATCH_NOT_CLOSED);
        batch
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBatch)]
    fn get_batch(&self, batch_id: u64) -> Batch<Self::Api> {
        self.require_existing_batch(batch_id)
    }

    #[view(getOpenBatchIds)]
    fn get_open_batch_ids(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let total = self.batch_count().get();

        for batch_id in 1..=total {
            if self.batches(batch_id).get().is_open {
                result.push(batch_id);
            }
        }
        result
    }

    #[view(getContribution)]
    fn get_contribution(
        &self,
        batch_id: u64,
        contributor: &ManagedAddress,
    ) -> Option<Contribution<Self::Api>> {
        let mapper = self.contributions(batch_id, contributor);
        if mapper.is_empty() {
            return None;
        }
        Some(mapper.get())
    }

    #[view(getBatchContributors)]
    fn get_batch_contributors(&self, batch_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for contributor in self.batch_contributors(batch_id).iter() {
            result.push(contributor);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getBatchCount)]
    #[storage_mapper("batchCount")]
    fn batch_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("batches")]
    fn batches(&self, batch_id: u64) -> SingleValueMapper<Batch<Self::Api>>;

    #[storage_mapper("contributions")]
    fn contributions(
        &self,
        batch_id: u64,
        contributor: &ManagedAddress,
    ) -> SingleValueMapper<Contribution<Self::Api>>;

    #[storage_mapper("batchContributors")]
    fn batch_contributors(&self, batch_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
