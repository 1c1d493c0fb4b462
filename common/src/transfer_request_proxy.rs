//! Endpoints every transfer-request protocol exposes, whatever its timing
//! policy. The vault talks to its configured protocol only through this
//! proxy.

use multiversx_sc::proxy_imports::*;

use crate::types::{ProcessedTransferRequest, TransferRequest, TransferRequestStatus};

pub struct TransferRequestProtocolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TransferRequestProtocolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TransferRequestProtocolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TransferRequestProtocolProxyMethods { wrapped_tx: tx }
    }
}

pub struct TransferRequestProtocolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> TransferRequestProtocolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn vote<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
        support: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&vault)
            .argument(&id)
            .argument(&support)
            .original_result()
    }

    pub fn process_transfer_request<Arg0: ProxyArg<u64>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProcessedTransferRequest<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("processTransferRequest")
            .argument(&id)
            .original_result()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn admin_update_transfer_request<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<bool>,
        Arg3: ProxyArg<bool>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
        for_fungible: Arg2,
        for_non_fungible: Arg3,
        to: Arg4,
        token: Arg5,
        amount: Arg6,
        token_nonce: Arg7,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("adminUpdateTransferRequest")
            .argument(&vault)
            .argument(&id)
            .argument(&for_fungible)
            .argument(&for_non_fungible)
            .argument(&to)
            .argument(&token)
            .argument(&amount)
            .argument(&token_nonce)
            .original_result()
    }

    pub fn admin_delete_transfer_request<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("adminDeleteTransferRequest")
            .argument(&vault)
            .argument(&id)
            .original_result()
    }

    pub fn transfer_request<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TransferRequest<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTransferRequest")
            .argument(&vault)
            .argument(&id)
            .original_result()
    }

    pub fn transfer_request_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TransferRequestStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTransferRequestStatus")
            .argument(&vault)
            .argument(&id)
            .original_result()
    }

    pub fn open_transfer_request_ids<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        vault: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOpenTransferRequestIds")
            .argument(&vault)
            .original_result()
    }

    pub fn open_transfer_request_count<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        vault: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOpenTransferRequestCount")
            .argument(&vault)
            .original_result()
    }

    pub fn last_transfer_request_id<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        vault: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastTransferRequestId")
            .argument(&vault)
            .original_result()
    }

    pub fn votes_for<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotesFor")
            .argument(&vault)
            .argument(&id)
            .original_result()
    }

    pub fn votes_against<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotesAgainst")
            .argument(&vault)
            .argument(&id)
            .original_result()
    }

    pub fn has_voted<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        vault: Arg0,
        id: Arg1,
        address: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&vault)
            .argument(&id)
            .argument(&address)
            .original_result()
    }
}
