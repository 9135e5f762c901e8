use multiversx_sc::proxy_imports::*;

use crate::fhe::CiphertextHandle;

pub struct DecryptionOracleProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DecryptionOracleProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DecryptionOracleProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DecryptionOracleProxyMethods { wrapped_tx: tx }
    }
}

pub struct DecryptionOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> DecryptionOracleProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Hands the ciphertexts to the oracle committee; returns its request id.
    pub fn request_decryption<
        Arg0: ProxyArg<ManagedVec<Env::Api, CiphertextHandle<Env::Api>>>,
    >(
        self,
        handles: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestDecryption")
            .argument(&handles)
            .original_result()
    }

    pub fn verify_decryption<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        request_id: Arg0,
        cleartexts: Arg1,
        proof: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verifyDecryption")
            .argument(&request_id)
            .argument(&cleartexts)
            .argument(&proof)
            .original_result()
    }
}
