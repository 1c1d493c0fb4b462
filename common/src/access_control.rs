multiversx_sc::imports!();

use crate::access_registry_proxy::AccessRegistryProxy;
use crate::errors::{ERR_NOT_ADMIN, ERR_NOT_MEMBER, ERR_NOT_PROPERTY_MANAGER};

/// Role checks against the access registry. Vaults and protocols share it;
/// a vault passes its own address as `vault`.
#[multiversx_sc::module]
pub trait AccessControlModule {
    fn is_vault_admin(&self, vault: &ManagedAddress, address: &ManagedAddress) -> bool {
        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .is_admin(vault.clone(), address.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn is_vault_member(&self, vault: &ManagedAddress, address: &ManagedAddress) -> bool {
        let registry = self.access_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(AccessRegistryProxy)
            .is_member(vault.clone(), address.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn require_vault_admin(&self, vault: &ManagedAddress) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.is_vault_admin(vault, &caller), ERR_NOT_ADMIN);
        caller
    }

    fn require_vault_member(&self, vault: &ManagedAddress) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.is_vault_member(vault, &caller), ERR_NOT_MEMBER);
        caller
    }

    /// Until a vault has a property, the contract owner acts as its
    /// initiator. Afterwards only the vault's admins may change it.
    fn require_property_manager(&self, vault: &ManagedAddress, property_is_set: bool) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        if !property_is_set && caller == self.blockchain().get_owner_address() {
            return caller;
        }
        require!(self.is_vault_admin(vault, &caller), ERR_NOT_PROPERTY_MANAGER);
        caller
    }

    #[view(getAccessRegistryAddress)]
    #[storage_mapper("accessRegistryAddress")]
    fn access_registry_address(&self) -> SingleValueMapper<ManagedAddress>;
}
