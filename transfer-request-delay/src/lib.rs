#![no_std]

multiversx_sc::imports!();

use custody_common::errors::*;
use custody_common::policy::{Verdict, VotingPolicy};
use custody_common::types::{
    DelayPoll, DelayVaultProperty, ProcessedTransferRequest, TransferRequestStatus,
};

// ============================================================
// Contract
// ============================================================

/// Transfer-request protocol with a post-approval delay.
///
/// A request is approved once the for-quorum is met and
/// `transfer_delay_seconds` have passed since the vote that met it.
/// Against-quorum denies immediately.
#[multiversx_sc::contract]
pub trait TransferRequestDelay:
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
    // Bootstrap by the initiator, then admin-only.
    // ========================================================

    #[endpoint(setVaultProperty)]
    fn set_vault_property(
        &self,
        vault: ManagedAddress,
        vote_for_required: u64,
        vote_against_required: u64,
        transfer_delay_seconds: u64,
    ) {
        let mapper = self.vault_property(&vault);
        let caller = self.require_property_manager(&vault, !mapper.is_empty());

        let property = DelayVaultProperty {
            vote_for_required,
            vote_against_required,
            transfer_delay_seconds,
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
    ) -> u64 {
        let caller = self.require_vault_member(&vault);
        require!(!self.vault_property(&vault).is_empty(), ERR_VAULT_PROPERTY_NOT_SET);

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
        self.transfer_request_poll(&vault, id).set(DelayPoll::default());

        id
    }

    // ========================================================
    // ENDPOINT: vote
    // The for-vote that reaches quorum restarts the delay.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, vault: ManagedAddress, id: u64, support: bool) {
        let caller = self.require_vault_member(&vault);
        self.require_transfer_request_exists(&vault, id);

        let votes_for_before = self.votes_for(&vault, id).len() as u64;
        self.record_vote(&vault, id, &caller, support);

        if support {
            let property = self.vault_property(&vault).get();
            let poll_mapper = self.transfer_request_poll(&vault, id);
            let now = self.blockchain().get_block_timestamp();
            let poll = property.anchor_after_for_vote(&poll_mapper.get(), votes_for_before, now);
            poll_mapper.set(poll);
        }
    }

    // ========================================================
    // ENDPOINT: processTransferRequest
    // Called by the vault itself. The record is gone before the
    // vault gets the verdict back.
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
    // ENDPOINT: admin corrections
    // ========================================================

    #[endpoint(adminUpdateTransferRequestPoll)]
    fn admin_update_transfer_request_poll(
        &self,
        vault: ManagedAddress,
        id: u64,
        votes_for: ManagedVec<ManagedAddress>,
        votes_against: ManagedVec<ManagedAddress>,
        last_for_vote_timestamp: u64,
    ) {
        let caller = self.require_admin_correction(&vault, id);
        require!(
            last_for_vote_timestamp <= self.blockchain().get_block_timestamp(),
            ERR_TIMESTAMP_IN_FUTURE
        );

        self.replace_votes(&vault, id, &votes_for, &votes_against);
        self.transfer_request_poll(&vault, id).set(DelayPoll {
            last_for_vote_timestamp,
        });

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
    fn get_vault_property(&self, vault: ManagedAddress) -> DelayVaultProperty {
        let mapper = self.vault_property(&vault);
        if mapper.is_empty() {
            return DelayVaultProperty::default();
        }
        mapper.get()
    }

    #[view(getTransferRequestPoll)]
    fn get_transfer_request_poll(&self, vault: ManagedAddress, id: u64) -> DelayPoll {
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
        property: &DelayVaultProperty,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("vaultProperty")]
    fn vault_property(&self, vault: &ManagedAddress) -> SingleValueMapper<DelayVaultProperty>;

    #[storage_mapper("transferRequestPoll")]
    fn transfer_request_poll(&self, vault: &ManagedAddress, id: u64) -> SingleValueMapper<DelayPoll>;
}
