// Shared setup for the blackbox tests: one registry, both transfer-request
// protocols, a signature protocol and a vault deployed by ADMIN.
#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;

use custody_common::access_registry_proxy::AccessRegistryProxy;
use custody_common::custody_vault_proxy::CustodyVaultProxy;
use custody_common::delay_transfer_request_proxy::DelayTransferRequestProxy;
use custody_common::signature_protocol_proxy::SignatureProtocolProxy;
use custody_common::transfer_request_proxy::TransferRequestProtocolProxy;
use custody_common::window_transfer_request_proxy::WindowTransferRequestProxy;

// ============================================================
// Accounts
// ============================================================

/// Deploys the shared contracts; acts as initiator on the protocols.
pub const OWNER: TestAddress = TestAddress::new("owner");
/// Deploys the vault, so it starts as its only admin and member.
pub const ADMIN: TestAddress = TestAddress::new("admin");
pub const MEMBER_A: TestAddress = TestAddress::new("member-a");
pub const MEMBER_B: TestAddress = TestAddress::new("member-b");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const RECIPIENT: TestAddress = TestAddress::new("recipient");

pub const REGISTRY_ADDRESS: TestSCAddress = TestSCAddress::new("registry");
pub const DELAY_PROTOCOL_ADDRESS: TestSCAddress = TestSCAddress::new("delay");
pub const WINDOW_PROTOCOL_ADDRESS: TestSCAddress = TestSCAddress::new("window");
pub const SIGNATURE_PROTOCOL_ADDRESS: TestSCAddress = TestSCAddress::new("signature");
pub const VAULT_ADDRESS: TestSCAddress = TestSCAddress::new("vault");

pub const VAULT_CODE_PATH: MxscPath = MxscPath::new("output/custody-vault.mxsc.json");
pub const REGISTRY_CODE_PATH: MxscPath = MxscPath::new("access-registry/output/access-registry.mxsc.json");
pub const DELAY_CODE_PATH: MxscPath =
    MxscPath::new("transfer-request-delay/output/transfer-request-delay.mxsc.json");
pub const WINDOW_CODE_PATH: MxscPath =
    MxscPath::new("transfer-request-window/output/transfer-request-window.mxsc.json");
pub const SIGNATURE_CODE_PATH: MxscPath =
    MxscPath::new("signature-protocol/output/signature-protocol.mxsc.json");

pub const TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("TOKEN-123456");
pub const NFT: TestTokenIdentifier = TestTokenIdentifier::new("NFT-123456");

pub const DAY: u64 = 24 * 60 * 60;
pub const START_BALANCE: u64 = 10_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(VAULT_CODE_PATH, custody_vault::ContractBuilder);
    blockchain.register_contract(REGISTRY_CODE_PATH, access_registry::ContractBuilder);
    blockchain.register_contract(DELAY_CODE_PATH, transfer_request_delay::ContractBuilder);
    blockchain.register_contract(WINDOW_CODE_PATH, transfer_request_window::ContractBuilder);
    blockchain.register_contract(SIGNATURE_CODE_PATH, signature_protocol::ContractBuilder);
    blockchain
}

pub fn egld() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::egld()
}

pub fn token() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(TOKEN)
}

pub fn nft() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(NFT)
}

pub fn addresses(list: &[TestAddress]) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut result = ManagedVec::new();
    for address in list {
        result.push(ManagedAddress::from(address.to_address()));
    }
    result
}

// ============================================================
// State
// ============================================================

pub struct CustodyTestState {
    pub world: ScenarioWorld,
}

impl CustodyTestState {
    /// Vault bound to the delay protocol.
    pub fn new() -> Self {
        Self::with_protocol(DELAY_PROTOCOL_ADDRESS)
    }

    pub fn with_protocol(protocol: TestSCAddress) -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world
            .account(ADMIN)
            .nonce(1)
            .balance(START_BALANCE)
            .esdt_balance(TOKEN, START_BALANCE);
        world.account(MEMBER_A).nonce(1);
        world.account(MEMBER_B).nonce(1);
        world.account(OUTSIDER).nonce(1);
        world.account(RECIPIENT).nonce(1);

        world
            .tx()
            .from(OWNER)
            .typed(AccessRegistryProxy)
            .init()
            .code(REGISTRY_CODE_PATH)
            .new_address(REGISTRY_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(DelayTransferRequestProxy)
            .init(REGISTRY_ADDRESS.to_address())
            .code(DELAY_CODE_PATH)
            .new_address(DELAY_PROTOCOL_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(WindowTransferRequestProxy)
            .init(REGISTRY_ADDRESS.to_address())
            .code(WINDOW_CODE_PATH)
            .new_address(WINDOW_PROTOCOL_ADDRESS)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(SignatureProtocolProxy)
            .init(REGISTRY_ADDRESS.to_address())
            .code(SIGNATURE_CODE_PATH)
            .new_address(SIGNATURE_PROTOCOL_ADDRESS)
            .run();

        world
            .tx()
            .from(ADMIN)
            .typed(CustodyVaultProxy)
            .init(
                REGISTRY_ADDRESS.to_address(),
                protocol.to_address(),
                SIGNATURE_PROTOCOL_ADDRESS.to_address(),
            )
            .code(VAULT_CODE_PATH)
            .new_address(VAULT_ADDRESS)
            .run();

        Self { world }
    }

    // ========================================================
    // Vault
    // ========================================================

    pub fn add_member(&mut self, member: TestAddress) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VAULT_ADDRESS)
            .typed(CustodyVaultProxy)
            .add_member(member.to_address())
            .run();
    }

    pub fn add_admin(&mut self, admin: TestAddress) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VAULT_ADDRESS)
            .typed(CustodyVaultProxy)
            .add_admin(admin.to_address())
            .run();
    }

    pub fn deposit_egld(&mut self, amount: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VAULT_ADDRESS)
            .typed(CustodyVaultProxy)
            .deposit()
            .egld(amount)
            .run();
    }

    pub fn deposit_token(&mut self, amount: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(VAULT_ADDRESS)
            .typed(CustodyVaultProxy)
            .deposit()
            .egld_or_single_esdt(&token(), 0u64, &BigUint::from(amount))
            .run();
    }

    pub fn process(&mut self, caller: TestAddress, id: u64) {
        self.world
            .tx()
            .from(caller)
            .to(VAULT_ADDRESS)
            .typed(CustodyVaultProxy)
            .process_transfer_request(id)
            .run();
    }

    pub fn process_expect_err(&mut self, caller: TestAddress, id: u64, message: &str) {
        self.world
            .tx()
            .from(caller)
            .to(VAULT_ADDRESS)
            .typed(CustodyVaultProxy)
            .process_transfer_request(id)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ========================================================
    // Protocols (shared interface)
    // ========================================================

    pub fn vote(&mut self, protocol: TestSCAddress, voter: TestAddress, id: u64, support: bool) {
        self.world
            .tx()
            .from(voter)
            .to(protocol)
            .typed(TransferRequestProtocolProxy)
            .vote(VAULT_ADDRESS.to_address(), id, support)
            .run();
    }

    pub fn vote_expect_err(
        &mut self,
        protocol: TestSCAddress,
        voter: TestAddress,
        id: u64,
        support: bool,
        message: &str,
    ) {
        self.world
            .tx()
            .from(voter)
            .to(protocol)
            .typed(TransferRequestProtocolProxy)
            .vote(VAULT_ADDRESS.to_address(), id, support)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn check_status(&mut self, protocol: TestSCAddress, id: u64, expected: TransferRequestStatus) {
        self.world
            .query()
            .to(protocol)
            .typed(TransferRequestProtocolProxy)
            .transfer_request_status(VAULT_ADDRESS.to_address(), id)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_open_request_count(&mut self, protocol: TestSCAddress, expected: usize) {
        self.world
            .query()
            .to(protocol)
            .typed(TransferRequestProtocolProxy)
            .open_transfer_request_count(VAULT_ADDRESS.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_last_request_id(&mut self, protocol: TestSCAddress, expected: u64) {
        self.world
            .query()
            .to(protocol)
            .typed(TransferRequestProtocolProxy)
            .last_transfer_request_id(VAULT_ADDRESS.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    // ========================================================
    // Delay protocol
    // ========================================================

    pub fn set_delay_property(&mut self, vote_for_required: u64, vote_against_required: u64, delay: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(DELAY_PROTOCOL_ADDRESS)
            .typed(DelayTransferRequestProxy)
            .set_vault_property(VAULT_ADDRESS.to_address(), vote_for_required, vote_against_required, delay)
            .run();
    }

    pub fn create_delay_request(
        &mut self,
        creator: TestAddress,
        for_fungible: bool,
        for_non_fungible: bool,
        token: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: u64,
        token_nonce: u64,
    ) -> u64 {
        self.world
            .tx()
            .from(creator)
            .to(DELAY_PROTOCOL_ADDRESS)
            .typed(DelayTransferRequestProxy)
            .create_transfer_request(
                VAULT_ADDRESS.to_address(),
                for_fungible,
                for_non_fungible,
                RECIPIENT.to_address(),
                token,
                amount,
                token_nonce,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_native_delay_request(&mut self, creator: TestAddress, amount: u64) -> u64 {
        self.create_delay_request(creator, false, false, egld(), amount, 0u64)
    }

    /// Native transfer request paying a contract instead of RECIPIENT.
    pub fn create_native_delay_request_to(&mut self, creator: TestAddress, to: TestSCAddress, amount: u64) -> u64 {
        self.world
            .tx()
            .from(creator)
            .to(DELAY_PROTOCOL_ADDRESS)
            .typed(DelayTransferRequestProxy)
            .create_transfer_request(
                VAULT_ADDRESS.to_address(),
                false,
                false,
                to.to_address(),
                egld(),
                amount,
                0u64,
            )
            .returns(ReturnsResult)
            .run()
    }

    // ========================================================
    // Window protocol
    // ========================================================

    pub fn set_window_property(
        &mut self,
        vote_for_required: u64,
        vote_against_required: u64,
        min_vote_period: u64,
        max_vote_period: u64,
    ) {
        self.world
            .tx()
            .from(OWNER)
            .to(WINDOW_PROTOCOL_ADDRESS)
            .typed(WindowTransferRequestProxy)
            .set_vault_property(
                VAULT_ADDRESS.to_address(),
                vote_for_required,
                vote_against_required,
                min_vote_period,
                max_vote_period,
            )
            .run();
    }

    pub fn create_native_window_request(
        &mut self,
        creator: TestAddress,
        amount: u64,
        vote_close_timestamp: u64,
    ) -> u64 {
        self.world
            .tx()
            .from(creator)
            .to(WINDOW_PROTOCOL_ADDRESS)
            .typed(WindowTransferRequestProxy)
            .create_transfer_request(
                VAULT_ADDRESS.to_address(),
                false,
                false,
                RECIPIENT.to_address(),
                egld(),
                amount,
                0u64,
                vote_close_timestamp,
            )
            .returns(ReturnsResult)
            .run()
    }
}

pub use custody_common::errors::*;
pub use custody_common::types::TransferRequestStatus;
