#![no_std]

multiversx_sc::imports!();

use custody_common::errors::*;
use custody_common::policy::{Verdict, VotingPolicy};
use custody_common::types::{
    ProcessedTransferRequest, TransferRequestStatus, WindowPoll, WindowVaultProperty,
};

// ============================================================
// Contract
// ============================================================

/// Transfer-request protocol with an explicit voting window.
///
/// The creator picks the close timestamp within the vault's
/// `[min, max]` vote period. Approval is decided only at or after close;
/// against-quorum denies at any time.
#[multiversx_sc::contract]
pub trait TransferRequestWindow:
    custody_common::access_control::AccessControlModule
    + custody_common::transfer_request::TransferRequestModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, access_registry_address: ManagedAddress) {
        self.access_registry_address().set(&access_registry_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setVaultProperty
    // ========================================================

    #[endpoint(setVaultProperty)]
    fn set_vault_property(
        &self,
        vault: ManagedAddress,
        vote_for_required: u64,
        vote_against_required: u64,
        min_vote_period_seconds: u64,
        max_vote_period_seconds: u64,
    ) {
        let mapper = self.vault_property(&vault);
        let caller = self.require_property_manager(&vault, !mapper.is_empty());

        let property = WindowVaultProperty {
            vote_for_required,
            vote_against_required,
            min_vote_period_seconds,
            max_vote_period_seconds,
        };
        if let Err(message) = property.validate() {
            sc_panic!(message);
        }
        mapper.set(property);

        self.vault_property_set_event(&vault, &caller, &property);
    }

    // ========================================================
    // ENDPOINT: createTransferRequest
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    #[endpoint(createTransferRequest)]
    fn create_transfer_request(
        &self,
        vault: ManagedAddress,
        for_fungible: bool,
        for_non_fungible: bool,
        to: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        token_nonce: u64,
        vote_close_timestamp: u64,
    ) -> u64 {
        let caller = self.require_vault_member(&vault);
        require!(!self.vault_property(&vault).is_empty(), ERR_VAULT_PROPERTY_NOT_SET);
        self.require_valid_close_timestamp(&vault, vote_close_timestamp);

        let id = self.insert_transfer_request(
            &vault,
            &caller,
            for_fungible,
            for_non_fungible,
            to,
            token,
            amount,
            token_nonce,
        );
        self.transfer_request_poll(&vault, id).set(WindowPoll { vote_close_timestamp });

        id
    }

    // ========================================================
    // ENDPOINT: vote
    // Only while the window is open.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, vault: ManagedAddress, id: u64, support: bool) {
        let caller = self.require_vault_member(&vault);
        self.require_transfer_request_exists(&vault, id);

        let property = self.vault_property(&vault).get();
        let poll = self.transfer_request_poll(&vault, id).get();
        if let Err(message) = property.check_vote_allowed(&poll, self.blockchain().get_block_timestamp()) {
            sc_panic!(message);
        }

        self.record_vote(&vault, id, &caller, support);
    }

    // ========================================================
    // ENDPOINT: processTransferRequest
    // Called by the vault itself.
    // ========================================================

    #[endpoint(processTransferRequest)]
    fn process_transfer_request(&self, id: u64) -> ProcessedTransferRequest<Self::Api> {
        let vault = self.blockchain().get_caller();
        self.require_transfer_request_exists(&vault, id);

        let processed = self.settle_transfer_request(&vault, id, self.verdict(&vault, id));
        self.transfer_request_poll(&vault, id).clear();

        processed
    }

    // ========================================================
    // ENDPOINT: deleteTransferRequest
    // The creator withdraws a request that is still open.
    // ========================================================

    #[endpoint(deleteTransferRequest)]
    fn delete_transfer_request(&self, vault: ManagedAddress, id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_transfer_request_exists(&vault, id);
        require!(
            self.transfer_request(&vault, id).get().creator == caller,
            ERR_NOT_CREATOR
        );

        self.discard_transfer_request(&vault, id);
        self.transfer_request_deleted_event(&vault, id, &caller);
    }

    // ========================================================
    // ENDPOINT: admin corrections
    // ========================================================

    #[endpoint(adminUpdateTransferRequestPoll)]
    fn admin_update_transfer_request_poll(
        &self,
        vault: ManagedAddress,
        id: u64,
        votes_for: ManagedVec<ManagedAddress>,
        votes_against: ManagedVec<ManagedAddress>,
        vote_close_timestamp: u64,
    ) {
        let caller = self.require_admin_correction(&vault, id);
        self.require_valid_close_timestamp(&vault, vote_close_timestamp);

        self.replace_votes(&vault, id, &votes_for, &votes_against);
        self.transfer_request_poll(&vault, id).set(WindowPoll { vote_close_timestamp });

        self.transfer_request_poll_updated_event(&vault, id, &caller);
    }

    #[endpoint(adminDeleteTransferRequest)]
    fn admin_delete_transfer_request(&self, vault: ManagedAddress, id: u64) {
        let caller = self.require_admin_correction(&vault, id);

        self.discard_transfer_request(&vault, id);
        self.transfer_request_deleted_event(&vault, id, &caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_valid_close_timestamp(&self, vault: &ManagedAddress, vote_close_timestamp: u64) {
        let property = self.vault_property(vault).get();
        let now = self.blockchain().get_block_timestamp();
        if let Err(message) = property.check_vote_close_timestamp(vote_close_timestamp, now) {
            sc_panic!(message);
        }
    }

    fn verdict(&self, vault: &ManagedAddress, id: u64) -> Verdict {
        let property = self.vault_property(vault).get();
        let poll = self.transfer_request_poll(vault, id).get();
        let created = self.transfer_request(vault, id).get().created;
        let now = self.blockchain().get_block_timestamp();

        property.verdict(&poll, &self.tally(vault, id), created, now)
    }

    fn discard_transfer_request(&self, vault: &ManagedAddress, id: u64) {
        self.remove_transfer_request(vault, id);
        self.transfer_request_poll(vault, id).clear();
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTransferRequestStatus)]
    fn get_transfer_request_status(&self, vault: ManagedAddress, id: u64) -> TransferRequestStatus {
        if self.transfer_request(&vault, id).is_empty() {
            return TransferRequestStatus::Invalid;
        }
        self.verdict(&vault, id).status()
    }

    #[view(getVaultProperty)]
    fn get_vault_property(&self, vault: ManagedAddress) -> WindowVaultProperty {
        let mapper = self.vault_property(&vault);
        if mapper.is_empty() {
            return WindowVaultProperty::default();
        }
        mapper.get()
    }

    #[view(getTransferRequestPoll)]
    fn get_transfer_request_poll(&self, vault: ManagedAddress, id: u64) -> WindowPoll {
        self.require_transfer_request_exists(&vault, id);
        self.transfer_request_poll(&vault, id).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("vaultPropertySet")]
    fn vault_property_set_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        property: &WindowVaultProperty,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("vaultProperty")]
    fn vault_property(&self, vault: &ManagedAddress) -> SingleValueMapper<WindowVaultProperty>;

    #[storage_mapper("transferRequestPoll")]
    fn transfer_request_poll(&self, vault: &ManagedAddress, id: u64) -> SingleValueMapper<WindowPoll>;
}
