#![no_std]

multiversx_sc::imports!();

use custody_common::errors::{ERR_ALREADY_ADMIN, ERR_ALREADY_MEMBER, ERR_NOT_AN_ADMIN, ERR_NOT_A_MEMBER};

// ============================================================
// Contract
// ============================================================

/// Role records for vaults.
///
/// Mutations are keyed by the caller: a vault contract can only change its
/// own admin and member sets. Admin and member are independent roles.
#[multiversx_sc::contract]
pub trait AccessRegistry {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: called by the vault
    // ========================================================

    #[endpoint(addAdmin)]
    fn add_admin(&self, admin: ManagedAddress) {
        let vault = self.blockchain().get_caller();
        require!(self.admins(&vault).insert(admin.clone()), ERR_ALREADY_ADMIN);
        self.vaults_where_admin(&admin).insert(vault.clone());

        self.admin_added_event(&vault, &admin);
    }

    #[endpoint(removeAdmin)]
    fn remove_admin(&self, admin: ManagedAddress) {
        let vault = self.blockchain().get_caller();
        require!(self.admins(&vault).swap_remove(&admin), ERR_NOT_AN_ADMIN);
        self.vaults_where_admin(&admin).swap_remove(&vault);

        self.admin_removed_event(&vault, &admin);
    }

    #[endpoint(addMember)]
    fn add_member(&self, member: ManagedAddress) {
        let vault = self.blockchain().get_caller();
        require!(self.members(&vault).insert(member.clone()), ERR_ALREADY_MEMBER);
        self.vaults_where_member(&member).insert(vault.clone());

        self.member_added_event(&vault, &member);
    }

    #[endpoint(removeMember)]
    fn remove_member(&self, member: ManagedAddress) {
        let vault = self.blockchain().get_caller();
        self.drop_member(&vault, &member);

        self.member_removed_event(&vault, &member);
    }

    /// Same effect as `removeMember`; the vault forwards the member's own
    /// request here so observers can tell the two apart.
    #[endpoint(renounceMembership)]
    fn renounce_membership(&self, member: ManagedAddress) {
        let vault = self.blockchain().get_caller();
        self.drop_member(&vault, &member);

        self.membership_renounced_event(&vault, &member);
    }

    fn drop_member(&self, vault: &ManagedAddress, member: &ManagedAddress) {
        require!(self.members(vault).swap_remove(member), ERR_NOT_A_MEMBER);
        self.vaults_where_member(member).swap_remove(vault);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAdmin)]
    fn is_admin(&self, vault: ManagedAddress, address: ManagedAddress) -> bool {
        self.admins(&vault).contains(&address)
    }

    #[view(isMember)]
    fn is_member(&self, vault: ManagedAddress, address: ManagedAddress) -> bool {
        self.members(&vault).contains(&address)
    }

    #[view(getAdmins)]
    fn get_admins(&self, vault: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for admin in self.admins(&vault).iter() {
            result.push(admin);
        }
        result
    }

    #[view(getMembers)]
    fn get_members(&self, vault: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members(&vault).iter() {
            result.push(member);
        }
        result
    }

    #[view(getAdminCount)]
    fn get_admin_count(&self, vault: ManagedAddress) -> usize {
        self.admins(&vault).len()
    }

    #[view(getMemberCount)]
    fn get_member_count(&self, vault: ManagedAddress) -> usize {
        self.members(&vault).len()
    }

    #[view(isAdminOfVault)]
    fn is_admin_of_vault(&self, address: ManagedAddress, vault: ManagedAddress) -> bool {
        self.vaults_where_admin(&address).contains(&vault)
    }

    #[view(isMemberOfVault)]
    fn is_member_of_vault(&self, address: ManagedAddress, vault: ManagedAddress) -> bool {
        self.vaults_where_member(&address).contains(&vault)
    }

    #[view(getVaultsWhereAdmin)]
    fn get_vaults_where_admin(&self, address: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for vault in self.vaults_where_admin(&address).iter() {
            result.push(vault);
        }
        result
    }

    #[view(getVaultsWhereMember)]
    fn get_vaults_where_member(&self, address: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for vault in self.vaults_where_member(&address).iter() {
            result.push(vault);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("adminAdded")]
    fn admin_added_event(&self, #[indexed] vault: &ManagedAddress, #[indexed] admin: &ManagedAddress);

    #[event("adminRemoved")]
    fn admin_removed_event(&self, #[indexed] vault: &ManagedAddress, #[indexed] admin: &ManagedAddress);

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] vault: &ManagedAddress, #[indexed] member: &ManagedAddress);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] vault: &ManagedAddress, #[indexed] member: &ManagedAddress);

    #[event("membershipRenounced")]
    fn membership_renounced_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] member: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("admins")]
    fn admins(&self, vault: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("members")]
    fn members(&self, vault: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    // ── Reverse indexes ──

    #[storage_mapper("vaultsWhereAdmin")]
    fn vaults_where_admin(&self, address: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("vaultsWhereMember")]
    fn vaults_where_member(&self, address: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
