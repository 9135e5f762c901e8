#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod mock_fhe_coprocessor_proxy;

const HANDLE_DOMAIN: &[u8] = b"mock-fhe/handle";
const PROOF_DOMAIN: &[u8] = b"mock-fhe/kms-proof";
const CLEARTEXT_WORD_LEN: usize = 32;

pub type CiphertextHandle<M> = ManagedByteArray<M, 32>;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct DecryptionRequest<M: ManagedTypeApi> {
    pub requester: ManagedAddress<M>,
    pub handles: ManagedVec<M, CiphertextHandle<M>>,
}

/// Stand-in for an FHE coprocessor and its decryption committee, for tests.
///
/// "Ciphertexts" are random-looking handles backed by a plaintext shadow
/// table; arithmetic wraps at 64 bits. Proofs are keccak256 over the request
/// id and cleartexts, so only this contract can produce a valid one.
#[multiversx_sc::contract]
pub trait MockFheCoprocessor {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Client side
    // ========================================================

    /// What a client SDK does before submitting an encrypted input.
    #[endpoint(encryptInput)]
    fn encrypt_input(&self, value: u64) -> CiphertextHandle<Self::Api> {
        self.new_handle(value)
    }

    // ========================================================
    // Executor
    // ========================================================

    #[endpoint(trivialEncrypt)]
    fn trivial_encrypt(&self, value: u64) -> CiphertextHandle<Self::Api> {
        self.new_handle(value)
    }

    #[endpoint(fheAdd)]
    fn fhe_add(
        &self,
        lhs: CiphertextHandle<Self::Api>,
        rhs: CiphertextHandle<Self::Api>,
    ) -> CiphertextHandle<Self::Api> {
        let sum = self.plaintext_of(&lhs).wrapping_add(self.plaintext_of(&rhs));
        self.new_handle(sum)
    }

    #[endpoint(fheMul)]
    fn fhe_mul(
        &self,
        lhs: CiphertextHandle<Self::Api>,
        rhs: CiphertextHandle<Self::Api>,
    ) -> CiphertextHandle<Self::Api> {
        let product = self.plaintext_of(&lhs).wrapping_mul(self.plaintext_of(&rhs));
        self.new_handle(product)
    }

    // ========================================================
    // Decryption oracle
    // ========================================================

    #[endpoint(requestDecryption)]
    fn request_decryption(&self, handles: ManagedVec<CiphertextHandle<Self::Api>>) -> u64 {
        for handle in handles.iter() {
            require!(self.known_handle(&handle).get(), "unknown ciphertext handle");
        }

        let request_id = self.next_request_id().update(|next| {
            let id = *next;
            *next += 1;
            id
        });
        let requester = self.blockchain().get_caller();
        self.requests(request_id).set(DecryptionRequest {
            requester: requester.clone(),
            handles,
        });

        self.decryption_requested_event(request_id, &requester);

        request_id
    }

    /// Cleartexts the committee would deliver: one 32-byte big-endian word
    /// per requested handle.
    #[view(getCleartexts)]
    fn get_cleartexts(&self, request_id: u64) -> ManagedBuffer {
        require!(!self.requests(request_id).is_empty(), "unknown request");
        let request = self.requests(request_id).get();

        let mut cleartexts = ManagedBuffer::new();
        for handle in request.handles.iter() {
            let mut word = [0u8; CLEARTEXT_WORD_LEN];
            word[CLEARTEXT_WORD_LEN - 8..].copy_from_slice(&self.plaintext_of(&handle).to_be_bytes());
            cleartexts.append_bytes(&word);
        }
        cleartexts
    }

    #[view(signCleartexts)]
    fn sign_cleartexts(&self, request_id: u64, cleartexts: ManagedBuffer) -> ManagedBuffer {
        self.proof_for(request_id, &cleartexts)
    }

    /// Never fails: any problem with the request is a `false`.
    #[view(verifyDecryption)]
    fn verify_decryption(
        &self,
        request_id: u64,
        cleartexts: ManagedBuffer,
        proof: ManagedBuffer,
    ) -> bool {
        if self.requests(request_id).is_empty() {
            return false;
        }
        cleartexts == self.get_cleartexts(request_id) && proof == self.proof_for(request_id, &cleartexts)
    }

    #[view(getPlaintext)]
    fn get_plaintext(&self, handle: CiphertextHandle<Self::Api>) -> u64 {
        self.plaintext_of(&handle)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn new_handle(&self, plaintext: u64) -> CiphertextHandle<Self::Api> {
        let nonce = self.handle_nonce().update(|nonce| {
            *nonce += 1;
            *nonce
        });

        let mut preimage = ManagedBuffer::new_from_bytes(HANDLE_DOMAIN);
        preimage.append_bytes(&nonce.to_be_bytes());
        let handle = self.crypto().keccak256(&preimage);

        self.known_handle(&handle).set(true);
        self.plaintexts(&handle).set(plaintext);
        handle
    }

    fn plaintext_of(&self, handle: &CiphertextHandle<Self::Api>) -> u64 {
        require!(self.known_handle(handle).get(), "unknown ciphertext handle");
        self.plaintexts(handle).get()
    }

    fn proof_for(&self, request_id: u64, cleartexts: &ManagedBuffer) -> ManagedBuffer {
        let mut preimage = ManagedBuffer::new_from_bytes(PROOF_DOMAIN);
        preimage.append_bytes(&request_id.to_be_bytes());
        preimage.append(cleartexts);
        self.crypto().keccak256(&preimage).as_managed_buffer().clone()
    }

    #[event("decryptionRequested")]
    fn decryption_requested_event(
        &self,
        #[indexed] request_id: u64,
        #[indexed] requester: &ManagedAddress,
    );

    #[storage_mapper("handleNonce")]
    fn handle_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("knownHandle")]
    fn known_handle(&self, handle: &CiphertextHandle<Self::Api>) -> SingleValueMapper<bool>;

    #[storage_mapper("plaintexts")]
    fn plaintexts(&self, handle: &CiphertextHandle<Self::Api>) -> SingleValueMapper<u64>;

    #[storage_mapper("nextRequestId")]
    fn next_request_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("requests")]
    fn requests(&self, request_id: u64) -> SingleValueMapper<DecryptionRequest<Self::Api>>;
}
