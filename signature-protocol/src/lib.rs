#![no_std]

multiversx_sc::imports!();

use custody_common::errors::{
    ERR_ALREADY_SIGNED, ERR_INVALID_HASH_LENGTH, ERR_VAULT_PROPERTY_NOT_SET,
    ERR_ZERO_SIGNATURES_REQUIRED,
};

const MESSAGE_HASH_LENGTH: usize = 32;

// ============================================================
// Contract
// ============================================================

/// Member co-signing of message hashes on behalf of a vault. A hash counts
/// as signed by the vault once `signatures_required` distinct members have
/// signed it. Does not gate asset transfers.
#[multiversx_sc::contract]
pub trait SignatureProtocol: custody_common::access_control::AccessControlModule {
    #[init]
    fn init(&self, access_registry_address: ManagedAddress) {
        self.access_registry_address().set(&access_registry_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setVaultProperty)]
    fn set_vault_property(&self, vault: ManagedAddress, signatures_required: u64) {
        let mapper = self.signatures_required(&vault);
        let caller = self.require_property_manager(&vault, !mapper.is_empty());
        require!(signatures_required > 0, ERR_ZERO_SIGNATURES_REQUIRED);

        mapper.set(signatures_required);
        self.signature_property_set_event(&vault, &caller, signatures_required);
    }

    #[endpoint(signMessageHash)]
    fn sign_message_hash(&self, vault: ManagedAddress, message_hash: ManagedBuffer) {
        let caller = self.require_vault_member(&vault);
        require!(!self.signatures_required(&vault).is_empty(), ERR_VAULT_PROPERTY_NOT_SET);
        require!(message_hash.len() == MESSAGE_HASH_LENGTH, ERR_INVALID_HASH_LENGTH);
        require!(
            self.message_signers(&vault, &message_hash).insert(caller.clone()),
            ERR_ALREADY_SIGNED
        );

        self.message_hash_signed_event(&vault, &message_hash, &caller);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMessageHashSigned)]
    fn is_message_hash_signed(&self, vault: ManagedAddress, message_hash: ManagedBuffer) -> bool {
        let required = self.signatures_required(&vault).get();
        required > 0 && self.message_signers(&vault, &message_hash).len() as u64 >= required
    }

    #[view(getSignerCount)]
    fn get_signer_count(&self, vault: ManagedAddress, message_hash: ManagedBuffer) -> usize {
        self.message_signers(&vault, &message_hash).len()
    }

    #[view(getMessageHashSigners)]
    fn get_message_hash_signers(
        &self,
        vault: ManagedAddress,
        message_hash: ManagedBuffer,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for signer in self.message_signers(&vault, &message_hash).iter() {
            result.push(signer);
        }
        result
    }

    #[view(getSignaturesRequired)]
    #[storage_mapper("signaturesRequired")]
    fn signatures_required(&self, vault: &ManagedAddress) -> SingleValueMapper<u64>;

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("signaturePropertySet")]
    fn signature_property_set_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] caller: &ManagedAddress,
        signatures_required: u64,
    );

    #[event("messageHashSigned")]
    fn message_hash_signed_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] message_hash: &ManagedBuffer,
        #[indexed] signer: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("messageSigners")]
    fn message_signers(
        &self,
        vault: &ManagedAddress,
        message_hash: &ManagedBuffer,
    ) -> UnorderedSetMapper<ManagedAddress>;
}
