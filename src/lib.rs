#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod batch;
pub mod confidential_settlement_proxy;
pub mod decryption;
pub mod decryption_oracle_proxy;
pub mod errors;
pub mod events;
pub mod fhe;
pub mod fhe_executor_proxy;
pub mod types;

use errors::ERR_ZERO_ADDRESS;

// ============================================================
// Contract
// ============================================================

/// Confidential batch-settlement ledger.
///
/// Contributors submit encrypted (shares, price) pairs into batches; the
/// ledger folds them into encrypted accumulators through the FHE executor
/// and, once a batch is closed, has the decryption oracle reveal only the
/// batch aggregates.
#[multiversx_sc::contract]
pub trait ConfidentialSettlement:
    access::AccessModule
    + events::EventsModule
    + fhe::FheModule
    + batch::BatchModule
    + decryption::DecryptionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes admin.
    #[init]
    fn init(
        &self,
        fhe_executor: ManagedAddress,
        decryption_oracle: ManagedAddress,
        oracle_callback_caller: ManagedAddress,
        cooldown_seconds: u64,
        decryption_timeout: u64,
    ) {
        require!(!fhe_executor.is_zero(), ERR_ZERO_ADDRESS);
        require!(!decryption_oracle.is_zero(), ERR_ZERO_ADDRESS);
        require!(!oracle_callback_caller.is_zero(), ERR_ZERO_ADDRESS);

        let admin = self.blockchain().get_caller();
        self.admin().set(&admin);
        self.paused().set(false);
        self.cooldown_seconds().set(cooldown_seconds);

        self.fhe_executor().set(&fhe_executor);
        self.decryption_oracle().set(&decryption_oracle);
        self.oracle_callback_caller().set(&oracle_callback_caller);
        self.decryption_timeout().set(decryption_timeout);

        self.batch_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    /// (fheExecutor, decryptionOracle, oracleCallbackCaller, cooldownSeconds, decryptionTimeout)
    #[view(getLedgerConfig)]
    fn get_ledger_config(
        &self,
    ) -> MultiValue5<ManagedAddress, ManagedAddress, ManagedAddress, u64, u64> {
        (
            self.fhe_executor().get(),
            self.decryption_oracle().get(),
            self.oracle_callback_caller().get(),
            self.cooldown_seconds().get(),
            self.decryption_timeout().get(),
        )
            .into()
    }
}
