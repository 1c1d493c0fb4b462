use multiversx_sc::proxy_imports::*;

use crate::types::{DelayPoll, DelayVaultProperty};

pub struct DelayTransferRequestProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DelayTransferRequestProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DelayTransferRequestProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DelayTransferRequestProxyMethods { wrapped_tx: tx }
    }
}

pub struct DelayTransferRequestProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DelayTransferRequestProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        access_registry_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&access_registry_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> DelayTransferRequestProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_vault_property<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        vote_for_required: Arg1,
        vote_against_required: Arg2,
        transfer_delay_seconds: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVaultProperty")
            .argument(&vault)
            .argument(&vote_for_required)
            .argument(&vote_against_required)
            .argument(&transfer_delay_seconds)
            .original_result()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_transfer_request<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
        Arg2: ProxyArg<bool>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        for_fungible: Arg1,
        for_non_fungible: Arg2,
        to: Arg3,
        token: Arg4,
        amount: Arg5,
        token_nonce: Arg6,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createTransferRequest")
            .argument(&vault)
            .argument(&for_fungible)
            .argument(&for_non_fungible)
            .argument(&to)
            .argument(&token)
            .argument(&amount)
            .argument(&token_nonce)
            .original_result()
    }

    pub fn admin_update_transfer_request_poll<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg3: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
        votes_for: Arg2,
        votes_against: Arg3,
        last_for_vote_timestamp: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("adminUpdateTransferRequestPoll")
            .argument(&vault)
            .argument(&id)
            .argument(&votes_for)
            .argument(&votes_against)
            .argument(&last_for_vote_timestamp)
            .original_result()
    }

    pub fn vault_property<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        vault: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, DelayVaultProperty> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVaultProperty")
            .argument(&vault)
            .original_result()
    }

    pub fn transfer_request_poll<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, DelayPoll> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTransferRequestPoll")
            .argument(&vault)
            .argument(&id)
            .original_result()
    }
}
