multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Transfer Request Status: verdict of a protocol on a request
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransferRequestStatus {
    /// No live request under this id (never created, processed or deleted).
    Invalid,
    /// Quorum or timing conditions not met yet.
    Pending,
    /// The vault may release the asset.
    Approved,
    /// Against-quorum reached, or the window closed without for-quorum.
    Denied,
}

// ============================================================
// Transfer Request: a proposed outgoing asset movement
// ============================================================

/// `for_fungible` and `for_non_fungible` are mutually exclusive;
/// both false means an EGLD transfer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct TransferRequest<M: ManagedTypeApi> {
    pub for_fungible: bool,
    pub for_non_fungible: bool,
    pub creator: ManagedAddress<M>,
    pub to: ManagedAddress<M>,
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub amount: BigUint<M>,
    /// Only meaningful for non-fungible transfers.
    pub token_nonce: u64,
    pub created: u64,
}

/// Returned by `processTransferRequest` after the protocol has already
/// dropped the record.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProcessedTransferRequest<M: ManagedTypeApi> {
    pub status: TransferRequestStatus,
    pub request: TransferRequest<M>,
}

// ============================================================
// Vault properties: per-vault policy configuration
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DelayVaultProperty {
    pub vote_for_required: u64,
    pub vote_against_required: u64,
    /// Countdown started by the vote that reaches for-quorum.
    pub transfer_delay_seconds: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WindowVaultProperty {
    pub vote_for_required: u64,
    pub vote_against_required: u64,
    pub min_vote_period_seconds: u64,
    pub max_vote_period_seconds: u64,
}

// ============================================================
// Polls: timing half of a request's vote tally
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DelayPoll {
    /// Timestamp of the for-vote that reached quorum, 0 until then.
    pub last_for_vote_timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WindowPoll {
    pub vote_close_timestamp: u64,
}
