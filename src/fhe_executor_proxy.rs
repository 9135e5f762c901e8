use multiversx_sc::proxy_imports::*;

use crate::fhe::CiphertextHandle;

pub struct FheExecutorProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FheExecutorProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FheExecutorProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FheExecutorProxyMethods { wrapped_tx: tx }
    }
}

pub struct FheExecutorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FheExecutorProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn trivial_encrypt<Arg0: ProxyArg<u64>>(
        self,
        value: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CiphertextHandle<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("trivialEncrypt")
            .argument(&value)
            .original_result()
    }

    pub fn fhe_add<
        Arg0: ProxyArg<CiphertextHandle<Env::Api>>,
        Arg1: ProxyArg<CiphertextHandle<Env::Api>>,
    >(
        self,
        lhs: Arg0,
        rhs: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CiphertextHandle<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fheAdd")
            .argument(&lhs)
            .argument(&rhs)
            .original_result()
    }

    pub fn fhe_mul<
        Arg0: ProxyArg<CiphertextHandle<Env::Api>>,
        Arg1: ProxyArg<CiphertextHandle<Env::Api>>,
    >(
        self,
        lhs: Arg0,
        rhs: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CiphertextHandle<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fheMul")
            .argument(&lhs)
            .argument(&rhs)
            .original_result()
    }
}
