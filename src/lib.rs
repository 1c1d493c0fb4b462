#![no_std]

multiversx_sc::imports!();

use custody_common::access_registry_proxy::AccessRegistryProxy;
use custody_common::errors::*;
use custody_common::signature_protocol_proxy::SignatureProtocolProxy;
use custody_common::transfer_request_proxy::TransferRequestProtocolProxy;
use custody_common::types::{ProcessedTransferRequest, TransferRequest, TransferRequestStatus};

// ============================================================
// Contract
// ============================================================

/// Jointly controlled custody of EGLD and ESDT assets.
///
/// Roles live in the access registry, transfer authorization in the
/// configured transfer-request protocol. Funding is open to anyone; assets
/// leave only through `processTransferRequest`.
#[multiversx_sc::contract]
pub trait CustodyVault: custody_common::access_control::AccessControlModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the first admin and member.
    #[init]
    fn init(
        &self,
        access_registry_address: ManagedAddress,
        transfer_request_protocol_address: ManagedAddress,
        signature_protocol_address: ManagedAddress,
    ) {
        self.access_registry_address().set(&access_registry_address);
        self.transfer_request_protocol_address()
            .set(&transfer_request_protocol_address);
        self.signature_protocol_address().set(&signature_protocol_address);

        let deployer = self.blockchain().get_caller();
        self.tx()
            .to(&access_registry_address)
            .typed(AccessRegistryProxy)
            .add_admin(deployer.clone())
            .sync_call();
        self.tx()
            .to(&access_registry_address)
            .typed(AccessRegistryProxy)
            .add_member(deployer)
            .sync_call();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Anyone may fund the vault.
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();

        self.deposit_event(&caller, &payment.token_identifier, payment.token_nonce, &payment.amount);
    }

    // ========================================================
    // ENDPOINTS: membership (admin-only)
    // ========================================================

    #[endpoint(addAdmin)]
    fn add_admin(&self, admin: ManagedAddress) {
        let caller = self.require_vault_admin(&self.blockchain().get_sc_address());

        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .add_admin(admin.clone())
            .sync_call();
        self.admin_added_event(&admin, &caller);
    }

    #[endpoint(removeAdmin)]
    fn remove_admin(&self, admin: ManagedAddress) {
        let caller = self.require_vault_admin(&self.blockchain().get_sc_address());
        require!(admin != caller, ERR_ADMIN_SELF_REMOVAL);

        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .remove_admin(admin.clone())
            .sync_call();
        self.admin_removed_event(&admin, &caller);
    }

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        let caller = self.require_vault_admin(&self.blockchain().get_sc_address());

        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .add_member(member.clone())
            .sync_call();
        self.member_added_event(&member, &caller);
    }

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        let caller = self.require_vault_admin(&self.blockchain().get_sc_address());

        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .remove_member(member.clone())
            .sync_call();
        self.member_removed_event(&member, &caller);
    }

    #[endpoint(renounceMembership)]
    fn renounce_membership(&self) {
        let caller = self.require_vault_member(&self.blockchain().get_sc_address());

        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .renounce_membership(caller.clone())
            .sync_call();
        self.membership_renounced_event(&caller);
    }

    // ========================================================
    // ENDPOINTS: protocol hot-swap (admin-only)
    // ========================================================

    /// Refused while the current protocol still holds open requests for
    /// this vault; admins drain them first with `adminDeleteTransferRequest`.
    #[endpoint(updateTransferRequestProtocol)]
    fn update_transfer_request_protocol(&self, protocol: ManagedAddress) {
        let vault = self.blockchain().get_sc_address();
        let caller = self.require_vault_admin(&vault);
        require!(self.blockchain().is_smart_contract(&protocol), ERR_NOT_SMART_CONTRACT);

        let current = self.transfer_request_protocol_address().get();
        let open_requests: usize = self
            .tx()
            .to(&current)
            .typed(TransferRequestProtocolProxy)
            .open_transfer_request_count(vault)
            .returns(ReturnsResult)
            .sync_call();
        require!(open_requests == 0, ERR_OPEN_REQUESTS_REMAIN);

        self.transfer_request_protocol_address().set(&protocol);
        self.transfer_request_protocol_updated_event(&current, &protocol, &caller);
    }

    #[endpoint(updateSignatureProtocol)]
    fn update_signature_protocol(&self, protocol: ManagedAddress) {
        let caller = self.require_vault_admin(&self.blockchain().get_sc_address());
        require!(self.blockchain().is_smart_contract(&protocol), ERR_NOT_SMART_CONTRACT);

        let previous = self.signature_protocol_address().get();
        self.signature_protocol_address().set(&protocol);
        self.signature_protocol_updated_event(&previous, &protocol, &caller);
    }

    // ========================================================
    // ENDPOINT: processTransferRequest
    // The protocol deletes its record before answering, so the
    // asset moves only after the request can no longer be found.
    // ========================================================

    #[endpoint(processTransferRequest)]
    fn process_transfer_request(&self, id: u64) {
        let caller = self.require_vault_member(&self.blockchain().get_sc_address());

        let protocol = self.transfer_request_protocol_address().get();
        let processed: ProcessedTransferRequest<Self::Api> = self
            .tx()
            .to(&protocol)
            .typed(TransferRequestProtocolProxy)
            .process_transfer_request(id)
            .returns(ReturnsResult)
            .sync_call();

        match processed.status {
            TransferRequestStatus::Approved => self.release(id, processed.request),
            TransferRequestStatus::Denied => self.transfer_request_denied_event(id, &caller),
            _ => sc_panic!(ERR_UNEXPECTED_STATUS),
        }
    }

    /// A transfer the vault cannot cover is dropped, not retried. Covered
    /// transfers leave as an async call: the request is already consumed on
    /// this side, and a recipient that rejects the payment only reaches
    /// `release_callback`.
    fn release(&self, id: u64, request: TransferRequest<Self::Api>) {
        let balance = self
            .blockchain()
            .get_sc_balance(&request.token, request.token_nonce);
        if balance < request.amount {
            self.transfer_failed_event(id, &request.to, &request.token, request.token_nonce, &request.amount);
            return;
        }

        let to = request.to.clone();
        let payment = EgldOrEsdtTokenPayment::new(request.token.clone(), request.token_nonce, request.amount.clone());
        self.tx()
            .to(to)
            .payment(payment)
            .callback(self.callbacks().release_callback(id, request))
            .async_call_and_exit();
    }

    #[callback]
    fn release_callback(
        &self,
        id: u64,
        request: TransferRequest<Self::Api>,
        #[call_result] result: ManagedAsyncCallResult<()>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(()) => {
                self.transfer_executed_event(id, &request.to, &request.token, request.token_nonce, &request.amount);
            }
            ManagedAsyncCallResult::Err(_) => {
                self.transfer_failed_event(id, &request.to, &request.token, request.token_nonce, &request.amount);
            }
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Whether the signature protocol considers `message_hash` signed on
    /// behalf of this vault.
    #[view(isValidSignature)]
    fn is_valid_signature(&self, message_hash: ManagedBuffer) -> bool {
        let protocol = self.signature_protocol_address().get();
        self.tx()
            .to(&protocol)
            .typed(SignatureProtocolProxy)
            .is_message_hash_signed(self.blockchain().get_sc_address(), message_hash)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] token_nonce: u64,
        amount: &BigUint,
    );

    #[event("transferExecuted")]
    fn transfer_executed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] to: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] token_nonce: u64,
        amount: &BigUint,
    );

    #[event("transferFailed")]
    fn transfer_failed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] to: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] token_nonce: u64,
        amount: &BigUint,
    );

    #[event("transferRequestDenied")]
    fn transfer_request_denied_event(&self, #[indexed] id: u64, #[indexed] processed_by: &ManagedAddress);

    #[event("adminAdded")]
    fn admin_added_event(&self, #[indexed] admin: &ManagedAddress, #[indexed] added_by: &ManagedAddress);

    #[event("adminRemoved")]
    fn admin_removed_event(&self, #[indexed] admin: &ManagedAddress, #[indexed] removed_by: &ManagedAddress);

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] member: &ManagedAddress, #[indexed] added_by: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] member: &ManagedAddress, #[indexed] removed_by: &ManagedAddress);

    #[event("membershipRenounced")]
    fn membership_renounced_event(&self, #[indexed] member: &ManagedAddress);

    #[event("transferRequestProtocolUpdated")]
    fn transfer_request_protocol_updated_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] current: &ManagedAddress,
        #[indexed] updated_by: &ManagedAddress,
    );

    #[event("signatureProtocolUpdated")]
    fn signature_protocol_updated_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] current: &ManagedAddress,
        #[indexed] updated_by: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTransferRequestProtocolAddress)]
    #[storage_mapper("transferRequestProtocolAddress")]
    fn transfer_request_protocol_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSignatureProtocolAddress)]
    #[storage_mapper("signatureProtocolAddress")]
    fn signature_protocol_address(&self) -> SingleValueMapper<ManagedAddress>;
}
