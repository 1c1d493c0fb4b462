multiversx_sc::imports!();

use crate::errors::*;
use crate::policy::{Tally, Verdict};
use crate::types::{ProcessedTransferRequest, TransferRequest, TransferRequestStatus};

/// Storage, validation and bookkeeping shared by every transfer-request
/// protocol. Timing rules live in the contracts that include this module.
///
/// All records are keyed by vault address, so one deployed protocol serves
/// any number of vaults.
#[multiversx_sc::module]
pub trait TransferRequestModule: crate::access_control::AccessControlModule {
    // ========================================================
    // ENDPOINT: adminUpdateTransferRequest
    // Full overwrite of the request fields. Creator and creation
    // time are kept; the poll is left untouched.
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    #[endpoint(adminUpdateTransferRequest)]
    fn admin_update_transfer_request(
        &self,
        vault: ManagedAddress,
        id: u64,
        for_fungible: bool,
        for_non_fungible: bool,
        to: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        token_nonce: u64,
    ) {
        let caller = self.require_admin_correction(&vault, id);
        self.validate_transfer_request(for_fungible, for_non_fungible, &to, &token, &amount, token_nonce);

        let mapper = self.transfer_request(&vault, id);
        let previous = mapper.get();
        let updated = TransferRequest {
            for_fungible,
            for_non_fungible,
            creator: previous.creator,
            to,
            token,
            amount,
            token_nonce,
            created: previous.created,
        };
        mapper.set(&updated);

        self.transfer_request_updated_event(&vault, id, &caller, &updated);
    }

    // ========================================================
    // INTERNAL: validation
    // ========================================================

    fn validate_transfer_request(
        &self,
        for_fungible: bool,
        for_non_fungible: bool,
        to: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        token_nonce: u64,
    ) {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
        require!(!(for_fungible && for_non_fungible), ERR_BOTH_TOKEN_KINDS);
        require!(!to.is_zero(), ERR_ZERO_RECIPIENT);

        if for_fungible {
            require!(
                token.is_esdt() && token.is_valid() && token_nonce == 0,
                ERR_FUNGIBLE_TOKEN_EXPECTED
            );
        } else if for_non_fungible {
            require!(
                token.is_esdt() && token.is_valid() && token_nonce > 0,
                ERR_NON_FUNGIBLE_TOKEN_EXPECTED
            );
        } else {
            require!(token.is_egld() && token_nonce == 0, ERR_NATIVE_TOKEN_EXPECTED);
        }
    }

    fn require_transfer_request_exists(&self, vault: &ManagedAddress, id: u64) {
        require!(!self.transfer_request(vault, id).is_empty(), ERR_REQUEST_NOT_FOUND);
    }

    /// Admin corrections apply to requests that still exist.
    fn require_admin_correction(&self, vault: &ManagedAddress, id: u64) -> ManagedAddress {
        let caller = self.require_vault_admin(vault);
        self.require_transfer_request_exists(vault, id);
        caller
    }

    // ========================================================
    // INTERNAL: request lifecycle
    // ========================================================

    /// Allocates the next id and indexes the request as open.
    #[allow(clippy::too_many_arguments)]
    fn insert_transfer_request(
        &self,
        vault: &ManagedAddress,
        creator: &ManagedAddress,
        for_fungible: bool,
        for_non_fungible: bool,
        to: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        token_nonce: u64,
    ) -> u64 {
        self.validate_transfer_request(for_fungible, for_non_fungible, &to, &token, &amount, token_nonce);

        let id = self.last_transfer_request_id(vault).get() + 1;
        let request = TransferRequest {
            for_fungible,
            for_non_fungible,
            creator: creator.clone(),
            to,
            token,
            amount,
            token_nonce,
            created: self.blockchain().get_block_timestamp(),
        };

        self.transfer_request(vault, id).set(&request);
        self.last_transfer_request_id(vault).set(id);
        self.open_transfer_request_ids(vault).insert(id);

        self.transfer_request_created_event(vault, id, creator, &request);

        id
    }

    /// Drops the request, its vote sets and its open-id entry. The timing
    /// half of the poll is cleared by the including contract.
    fn remove_transfer_request(&self, vault: &ManagedAddress, id: u64) {
        self.transfer_request(vault, id).clear();
        self.open_transfer_request_ids(vault).remove(&id);
        self.votes_for(vault, id).clear();
        self.votes_against(vault, id).clear();
    }

    /// Consumes the request once its verdict is final. A pending verdict
    /// fails with its reason and leaves the request in place; the including
    /// contract clears its poll afterwards.
    fn settle_transfer_request(
        &self,
        vault: &ManagedAddress,
        id: u64,
        verdict: Verdict,
    ) -> ProcessedTransferRequest<Self::Api> {
        let status = match verdict {
            Verdict::Pending(reason) => sc_panic!(reason.message()),
            verdict => verdict.status(),
        };

        let request = self.transfer_request(vault, id).get();
        self.remove_transfer_request(vault, id);
        self.transfer_request_processed_event(vault, id, status);

        ProcessedTransferRequest { status, request }
    }

    // ========================================================
    // INTERNAL: votes
    // ========================================================

    fn record_vote(&self, vault: &ManagedAddress, id: u64, voter: &ManagedAddress, support: bool) {
        require!(!self.has_voted(vault.clone(), id, voter.clone()), ERR_ALREADY_VOTED);

        if support {
            self.votes_for(vault, id).insert(voter.clone());
        } else {
            self.votes_against(vault, id).insert(voter.clone());
        }

        self.transfer_request_voted_event(vault, id, voter, support);
    }

    fn tally(&self, vault: &ManagedAddress, id: u64) -> Tally {
        Tally {
            votes_for: self.votes_for(vault, id).len() as u64,
            votes_against: self.votes_against(vault, id).len() as u64,
        }
    }

    /// Admin overwrite of both vote sets. Every voter must be a member and
    /// may appear on one side only.
    fn replace_votes(
        &self,
        vault: &ManagedAddress,
        id: u64,
        votes_for: &ManagedVec<ManagedAddress>,
        votes_against: &ManagedVec<ManagedAddress>,
    ) {
        for voter in votes_for.iter() {
            require!(!votes_against.contains(&voter), ERR_VOTER_IN_BOTH_SETS);
            require!(self.is_vault_member(vault, &voter), ERR_VOTER_NOT_MEMBER);
        }
        for voter in votes_against.iter() {
            require!(self.is_vault_member(vault, &voter), ERR_VOTER_NOT_MEMBER);
        }

        let mut for_mapper = self.votes_for(vault, id);
        for_mapper.clear();
        for voter in votes_for.iter() {
            for_mapper.insert(voter.clone_value());
        }

        let mut against_mapper = self.votes_against(vault, id);
        against_mapper.clear();
        for voter in votes_against.iter() {
            against_mapper.insert(voter.clone_value());
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTransferRequest)]
    fn get_transfer_request(&self, vault: ManagedAddress, id: u64) -> TransferRequest<Self::Api> {
        self.require_transfer_request_exists(&vault, id);
        self.transfer_request(&vault, id).get()
    }

    #[view(getOpenTransferRequestIds)]
    fn get_open_transfer_request_ids(&self, vault: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for id in self.open_transfer_request_ids(&vault).iter() {
            result.push(id);
        }
        result
    }

    #[view(getOpenTransferRequestCount)]
    fn get_open_transfer_request_count(&self, vault: ManagedAddress) -> usize {
        self.open_transfer_request_ids(&vault).len()
    }

    #[view(getLastTransferRequestId)]
    fn get_last_transfer_request_id(&self, vault: ManagedAddress) -> u64 {
        self.last_transfer_request_id(&vault).get()
    }

    #[view(getVotesFor)]
    fn get_votes_for(&self, vault: ManagedAddress, id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.votes_for(&vault, id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getVotesAgainst)]
    fn get_votes_against(&self, vault: ManagedAddress, id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.votes_against(&vault, id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, vault: ManagedAddress, id: u64, address: ManagedAddress) -> bool {
        self.votes_for(&vault, id).contains(&address) || self.votes_against(&vault, id).contains(&address)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transferRequestCreated")]
    fn transfer_request_created_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] id: u64,
        #[indexed] creator: &ManagedAddress,
        request: &TransferRequest<Self::Api>,
    );

    #[event("transferRequestVoted")]
    fn transfer_request_voted_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] id: u64,
        #[indexed] voter: &ManagedAddress,
        support: bool,
    );

    #[event("transferRequestProcessed")]
    fn transfer_request_processed_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] id: u64,
        status: TransferRequestStatus,
    );

    #[event("transferRequestUpdated")]
    fn transfer_request_updated_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] id: u64,
        #[indexed] admin: &ManagedAddress,
        request: &TransferRequest<Self::Api>,
    );

    #[event("transferRequestPollUpdated")]
    fn transfer_request_poll_updated_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] id: u64,
        #[indexed] admin: &ManagedAddress,
    );

    #[event("transferRequestDeleted")]
    fn transfer_request_deleted_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] id: u64,
        #[indexed] deleted_by: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("lastTransferRequestId")]
    fn last_transfer_request_id(&self, vault: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("transferRequest")]
    fn transfer_request(&self, vault: &ManagedAddress, id: u64) -> SingleValueMapper<TransferRequest<Self::Api>>;

    /// Insertion-ordered ids of requests that still have a record.
    #[storage_mapper("openTransferRequestIds")]
    fn open_transfer_request_ids(&self, vault: &ManagedAddress) -> SetMapper<u64>;

    #[storage_mapper("votesFor")]
    fn votes_for(&self, vault: &ManagedAddress, id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("votesAgainst")]
    fn votes_against(&self, vault: &ManagedAddress, id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
