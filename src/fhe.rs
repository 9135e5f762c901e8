multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{access, errors::ERR_ZERO_ADDRESS, events, fhe_executor_proxy};

pub const HANDLE_LEN: usize = 32;

pub type CiphertextHandle<M> = ManagedByteArray<M, HANDLE_LEN>;

/// Encrypted 64-bit unsigned integer.
///
/// The ledger only ever holds the opaque handle issued by the FHE executor;
/// the ciphertext itself and all arithmetic on it live with the executor.
/// The all-zero handle is reserved for "not materialized yet", which is
/// distinct from an encrypted zero.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Euint64<M: ManagedTypeApi> {
    pub handle: CiphertextHandle<M>,
}

impl<M: ManagedTypeApi> Euint64<M> {
    pub fn from_handle(handle: CiphertextHandle<M>) -> Self {
        Euint64 { handle }
    }

    pub fn uninitialized() -> Self {
        Self::from_handle(ManagedByteArray::new_from_bytes(&[0u8; HANDLE_LEN]))
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.to_byte_array() != [0u8; HANDLE_LEN]
    }

    /// Canonical serialization used for content binding.
    pub fn handle(&self) -> &CiphertextHandle<M> {
        &self.handle
    }
}

/// Homomorphic operations, delegated to the configured FHE executor.
#[multiversx_sc::module]
pub trait FheModule: access::AccessModule + events::EventsModule {
    #[endpoint(setFheExecutor)]
    fn set_fhe_executor(&self, executor: ManagedAddress) {
        self.require_admin();
        require!(!executor.is_zero(), ERR_ZERO_ADDRESS);

        self.fhe_executor().set(&executor);
        self.fhe_executor_changed_event(&executor);
    }

    fn fhe_as_euint64(&self, value: u64) -> Euint64<Self::Api> {
        let executor = self.fhe_executor().get();
        let handle: CiphertextHandle<Self::Api> = self
            .tx()
            .to(&executor)
            .typed(fhe_executor_proxy::FheExecutorProxy)
            .trivial_encrypt(value)
            .returns(ReturnsResult)
            .sync_call();
        Euint64::from_handle(handle)
    }

    fn fhe_add(&self, lhs: &Euint64<Self::Api>, rhs: &Euint64<Self::Api>) -> Euint64<Self::Api> {
        let executor = self.fhe_executor().get();
        let handle: CiphertextHandle<Self::Api> = self
            .tx()
            .to(&executor)
            .typed(fhe_executor_proxy::FheExecutorProxy)
            .fhe_add(lhs.handle().clone(), rhs.handle().clone())
            .returns(ReturnsResult)
            .sync_call();
        Euint64::from_handle(handle)
    }

    fn fhe_mul(&self, lhs: &Euint64<Self::Api>, rhs: &Euint64<Self::Api>) -> Euint64<Self::Api> {
        let executor = self.fhe_executor().get();
        let handle: CiphertextHandle<Self::Api> = self
            .tx()
            .to(&executor)
            .typed(fhe_executor_proxy::FheExecutorProxy)
            .fhe_mul(lhs.handle().clone(), rhs.handle().clone())
            .returns(ReturnsResult)
            .sync_call();
        Euint64::from_handle(handle)
    }

    /// Replaces an unmaterialized value with an encrypted zero, so the
    /// executor never receives an undefined operand.
    fn fhe_materialize(&self, value: Euint64<Self::Api>) -> Euint64<Self::Api> {
        if value.is_initialized() {
            value
        } else {
            self.fhe_as_euint64(0)
        }
    }

    #[view(getFheExecutor)]
    #[storage_mapper("fheExecutor")]
    fn fhe_executor(&self) -> SingleValueMapper<ManagedAddress>;
}
