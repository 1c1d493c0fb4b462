use multiversx_sc::proxy_imports::*;

pub struct CustodyVaultProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CustodyVaultProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CustodyVaultProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CustodyVaultProxyMethods { wrapped_tx: tx }
    }
}

pub struct CustodyVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CustodyVaultProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        access_registry_address: Arg0,
        transfer_request_protocol_address: Arg1,
        signature_protocol_address: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&access_registry_address)
            .argument(&transfer_request_protocol_address)
            .argument(&signature_protocol_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> CustodyVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("deposit")
            .original_result()
    }

    pub fn add_admin<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        admin: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addAdmin")
            .argument(&admin)
            .original_result()
    }

    pub fn remove_admin<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        admin: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeAdmin")
            .argument(&admin)
            .original_result()
    }

    pub fn add_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addMember")
            .argument(&member)
            .original_result()
    }

    pub fn remove_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeMember")
            .argument(&member)
            .original_result()
    }

    pub fn renounce_membership(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("renounceMembership")
            .original_result()
    }

    pub fn update_transfer_request_protocol<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        protocol: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateTransferRequestProtocol")
            .argument(&protocol)
            .original_result()
    }

    pub fn update_signature_protocol<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        protocol: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateSignatureProtocol")
            .argument(&protocol)
            .original_result()
    }

    pub fn process_transfer_request<Arg0: ProxyArg<u64>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("processTransferRequest")
            .argument(&id)
            .original_result()
    }

    pub fn is_valid_signature<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        message_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isValidSignature")
            .argument(&message_hash)
            .original_result()
    }

    pub fn access_registry_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAccessRegistryAddress")
            .original_result()
    }

    pub fn transfer_request_protocol_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTransferRequestProtocolAddress")
            .original_result()
    }

    pub fn signature_protocol_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSignatureProtocolAddress")
            .original_result()
    }
}
