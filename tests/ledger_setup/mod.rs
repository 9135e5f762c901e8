#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use confidential_settlement::{
    confidential_settlement_proxy::ConfidentialSettlementProxy,
    fhe::Euint64,
    types::{Batch, DecryptionContext, RevealedTotals},
};
use mock_fhe_coprocessor::mock_fhe_coprocessor_proxy::MockFheCoprocessorProxy;
use multiversx_sc_scenario::scenario_model::Log;

pub const ADMIN: TestAddress = TestAddress::new("admin");
pub const CONTRIBUTOR_A: TestAddress = TestAddress::new("contributor-a");
pub const CONTRIBUTOR_B: TestAddress = TestAddress::new("contributor-b");
pub const CONTRIBUTOR_C: TestAddress = TestAddress::new("contributor-c");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const RELAYER: TestAddress = TestAddress::new("oracle-relayer");

pub const LEDGER: TestSCAddress = TestSCAddress::new("confidential-settlement");
pub const COPROCESSOR: TestSCAddress = TestSCAddress::new("fhe-coprocessor");

pub const LEDGER_CODE: MxscPath = MxscPath::new("output/confidential-settlement.mxsc.json");
pub const COPROCESSOR_CODE: MxscPath =
    MxscPath::new("test-contracts/mock-fhe-coprocessor/output/mock-fhe-coprocessor.mxsc.json");

pub const COOLDOWN: u64 = 60;
pub const DECRYPTION_TIMEOUT: u64 = 3_600;
pub const START_TIMESTAMP: u64 = 1_700_000_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(LEDGER_CODE, confidential_settlement::ContractBuilder);
    blockchain.register_contract(COPROCESSOR_CODE, mock_fhe_coprocessor::ContractBuilder);
    blockchain
}

pub fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

/// Events with the given identifier emitted by the ledger itself. Calls into
/// the coprocessor add its own logs to the same transaction.
pub fn ledger_events(logs: &[Log], identifier: &str) -> Vec<Log> {
    logs.iter()
        .filter(|log| {
            log.address == LEDGER.to_address()
                && log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes())
        })
        .cloned()
        .collect()
}

/// Topic bytes of an `#[indexed]` event argument.
pub fn topic<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

/// Ledger deployed against the mock coprocessor, which plays both the FHE
/// executor and the decryption oracle. `RELAYER` delivers oracle callbacks.
pub struct LedgerTestState {
    pub world: ScenarioWorld,
    pub now: u64,
}

impl LedgerTestState {
    pub fn new() -> Self {
        Self::new_at(START_TIMESTAMP)
    }

    /// Deploys with the chain clock at `timestamp`.
    pub fn new_at(timestamp: u64) -> Self {
        let mut world = world();

        for account in [ADMIN, CONTRIBUTOR_A, CONTRIBUTOR_B, CONTRIBUTOR_C, OUTSIDER, RELAYER] {
            world.account(account).nonce(1);
        }
        world.current_block().block_timestamp(timestamp);

        world
            .tx()
            .from(ADMIN)
            .typed(MockFheCoprocessorProxy)
            .init()
            .code(COPROCESSOR_CODE)
            .new_address(COPROCESSOR)
            .run();

        let coprocessor = ManagedAddress::<StaticApi>::from(COPROCESSOR.to_address());
        world
            .tx()
            .from(ADMIN)
            .typed(ConfidentialSettlementProxy)
            .init(
                coprocessor.clone(),
                coprocessor,
                managed(RELAYER),
                COOLDOWN,
                DECRYPTION_TIMEOUT,
            )
            .code(LEDGER_CODE)
            .new_address(LEDGER)
            .run();

        Self {
            world,
            now: timestamp,
        }
    }

    /// Ledger with contributors A, B and C on the allow-list.
    pub fn with_contributors() -> Self {
        let mut state = Self::new();
        state.set_eligibility(CONTRIBUTOR_A, true);
        state.set_eligibility(CONTRIBUTOR_B, true);
        state.set_eligibility(CONTRIBUTOR_C, true);
        state
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.now += seconds;
        self.world.current_block().block_timestamp(self.now);
    }

    // ── Client side ──

    pub fn encrypt(&mut self, value: u64) -> Euint64<StaticApi> {
        let handle = self
            .world
            .tx()
            .from(OUTSIDER)
            .to(COPROCESSOR)
            .typed(MockFheCoprocessorProxy)
            .encrypt_input(value)
            .returns(ReturnsResult)
            .run();
        Euint64::from_handle(handle)
    }

    pub fn plaintext(&mut self, value: &Euint64<StaticApi>) -> u64 {
        self.world
            .query()
            .to(COPROCESSOR)
            .typed(MockFheCoprocessorProxy)
            .get_plaintext(value.handle.clone())
            .returns(ReturnsResult)
            .run()
    }

    // ── Ledger calls ──

    pub fn set_eligibility(&mut self, contributor: TestAddress, allowed: bool) {
        self.world
            .tx()
            .from(ADMIN)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .set_contributor_eligibility(managed(contributor), allowed)
            .run();
    }

    pub fn open_batch(&mut self) -> u64 {
        self.world
            .tx()
            .from(ADMIN)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .open_batch()
            .returns(ReturnsResult)
            .run()
    }

    pub fn close_batch(&mut self, batch_id: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .close_batch(batch_id)
            .run();
    }

    pub fn submit(&mut self, contributor: TestAddress, batch_id: u64, shares: u64, price: u64) {
        let shares = self.encrypt(shares);
        let price = self.encrypt(price);
        self.submit_encrypted(contributor, batch_id, shares, price);
    }

    pub fn submit_encrypted(
        &mut self,
        contributor: TestAddress,
        batch_id: u64,
        shares: Euint64<StaticApi>,
        price: Euint64<StaticApi>,
    ) {
        self.world
            .tx()
            .from(contributor)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .submit_contribution(batch_id, shares, price)
            .run();
    }

    pub fn submit_expect_err(
        &mut self,
        contributor: TestAddress,
        batch_id: u64,
        shares: u64,
        price: u64,
        message: &str,
    ) {
        let shares = self.encrypt(shares);
        let price = self.encrypt(price);
        self.world
            .tx()
            .from(contributor)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .submit_contribution(batch_id, shares, price)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn request_decryption(&mut self, batch_id: u64) -> u64 {
        self.world
            .tx()
            .from(ADMIN)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .request_decryption(batch_id)
            .returns(ReturnsResult)
            .run()
    }

    // ── Oracle side ──

    /// Cleartexts and proof exactly as the oracle committee would produce them.
    pub fn oracle_answer(
        &mut self,
        request_id: u64,
    ) -> (ManagedBuffer<StaticApi>, ManagedBuffer<StaticApi>) {
        let cleartexts = self
            .world
            .query()
            .to(COPROCESSOR)
            .typed(MockFheCoprocessorProxy)
            .get_cleartexts(request_id)
            .returns(ReturnsResult)
            .run();
        let proof = self.sign(request_id, &cleartexts);
        (cleartexts, proof)
    }

    pub fn sign(
        &mut self,
        request_id: u64,
        cleartexts: &ManagedBuffer<StaticApi>,
    ) -> ManagedBuffer<StaticApi> {
        self.world
            .query()
            .to(COPROCESSOR)
            .typed(MockFheCoprocessorProxy)
            .sign_cleartexts(request_id, cleartexts.clone())
            .returns(ReturnsResult)
            .run()
    }

    /// Relays the oracle's genuine answer; returns the transaction logs.
    pub fn deliver(&mut self, request_id: u64) -> Vec<Log> {
        let (cleartexts, proof) = self.oracle_answer(request_id);
        self.world
            .tx()
            .from(RELAYER)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .on_decryption_callback(request_id, cleartexts, proof)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn deliver_expect_err(&mut self, request_id: u64, message: &str) {
        let (cleartexts, proof) = self.oracle_answer(request_id);
        self.callback_expect_err(RELAYER, request_id, cleartexts, proof, message);
    }

    pub fn callback_expect_err(
        &mut self,
        from: TestAddress,
        request_id: u64,
        cleartexts: ManagedBuffer<StaticApi>,
        proof: ManagedBuffer<StaticApi>,
        message: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .on_decryption_callback(request_id, cleartexts, proof)
            .returns(ExpectError(4, message))
            .run();
    }

    // ── Views ──

    pub fn batch(&mut self, batch_id: u64) -> Batch<StaticApi> {
        self.world
            .query()
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .get_batch(batch_id)
            .returns(ReturnsResult)
            .run()
    }

    /// Plaintext (total_shares, total_value) behind a batch's accumulators.
    pub fn accumulator_plaintexts(&mut self, batch_id: u64) -> (u64, u64) {
        let batch = self.batch(batch_id);
        (
            self.plaintext(&batch.total_shares),
            self.plaintext(&batch.total_value),
        )
    }

    pub fn decryption_context(&mut self, request_id: u64) -> DecryptionContext<StaticApi> {
        self.world
            .query()
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .get_decryption_context(request_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn revealed_totals(&mut self, batch_id: u64) -> RevealedTotals<StaticApi> {
        self.world
            .query()
            .to(LEDGER)
            .typed(ConfidentialSettlementProxy)
            .get_revealed_totals(batch_id)
            .returns(ReturnsResult)
            .run()
    }
}
