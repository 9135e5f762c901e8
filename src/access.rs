multiversx_sc::imports!();

use crate::{errors::*, events};

/// Admin role, contributor allow-list, global pause and per-address cooldowns.
///
/// The `require_*` helpers are the preconditions every mutating endpoint of
/// the other modules runs before touching state.
#[multiversx_sc::module]
pub trait AccessModule: events::EventsModule {
    // ========================================================
    // ENDPOINTS: admin only
    // ========================================================

    #[endpoint(transferAdmin)]
    fn transfer_admin(&self, new_admin: ManagedAddress) {
        self.require_admin();
        require!(!new_admin.is_zero(), ERR_ZERO_ADDRESS);

        let previous_admin = self.admin().get();
        self.admin().set(&new_admin);

        self.admin_transferred_event(&previous_admin, &new_admin);
    }

    /// Setting the current value again is a no-op and emits nothing.
    #[endpoint(setContributorEligibility)]
    fn set_contributor_eligibility(&self, contributor: ManagedAddress, allowed: bool) {
        self.require_admin();

        let changed = if allowed {
            self.contributors().insert(contributor.clone())
        } else {
            self.contributors().swap_remove(&contributor)
        };

        if changed {
            self.contributor_eligibility_event(&contributor, allowed);
        }
    }

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_admin();
        if self.paused().get() == paused {
            return;
        }

        self.paused().set(paused);
        self.paused_changed_event(paused);
    }

    /// Only affects checks evaluated after this call; recorded timestamps are kept.
    #[endpoint(setCooldown)]
    fn set_cooldown(&self, seconds: u64) {
        self.require_admin();

        let previous_seconds = self.cooldown_seconds().get();
        self.cooldown_seconds().set(seconds);

        self.cooldown_changed_event(previous_seconds, seconds);
    }

    // ========================================================
    // GUARDS
    // ========================================================

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_NOT_ADMIN);
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    fn require_eligible_contributor(&self, address: &ManagedAddress) {
        require!(self.contributors().contains(address), ERR_NOT_CONTRIBUTOR);
    }

    fn require_submission_cooldown(&self, address: &ManagedAddress) {
        let last_action = self.last_submission(address).get();
        require!(self.cooldown_elapsed(last_action), ERR_SUBMISSION_COOLDOWN);
    }

    fn require_decryption_cooldown(&self, address: &ManagedAddress) {
        let last_action = self.last_decryption_request(address).get();
        require!(self.cooldown_elapsed(last_action), ERR_DECRYPTION_COOLDOWN);
    }

    /// `last_action + cooldown <= now`, with the cooldown currently configured.
    /// A zero timestamp means the address never acted and always passes.
    fn cooldown_elapsed(&self, last_action: u64) -> bool {
        if last_action == 0 {
            return true;
        }

        let now = self.blockchain().get_block_timestamp();
        now.saturating_sub(last_action) >= self.cooldown_seconds().get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isContributor)]
    fn is_contributor(&self, address: &ManagedAddress) -> bool {
        self.contributors().contains(address)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("contributors")]
    fn contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[view(getCooldownSeconds)]
    #[storage_mapper("cooldownSeconds")]
    fn cooldown_seconds(&self) -> SingleValueMapper<u64>;

    // ── Per-address timers, one per action kind ──

    #[view(getLastSubmissionTime)]
    #[storage_mapper("lastSubmission")]
    fn last_submission(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getLastDecryptionRequestTime)]
    #[storage_mapper("lastDecryptionRequest")]
    fn last_decryption_request(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;
}
