// Stable reason strings. Clients and tests match on these, so treat any
// change here as a breaking change.

// ── Authorization ──

pub const ERR_NOT_ADMIN: &str = "Caller is not an admin of the vault";
pub const ERR_NOT_MEMBER: &str = "Caller is not a member of the vault";
pub const ERR_NOT_PROPERTY_MANAGER: &str = "Only the initiator or a vault admin can set the vault property";
pub const ERR_NOT_CREATOR: &str = "Only the creator can delete the transfer request";

// ── Validation ──

pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_BOTH_TOKEN_KINDS: &str = "Transfer request cannot be both fungible and non-fungible";
pub const ERR_NATIVE_TOKEN_EXPECTED: &str = "Native transfer must use EGLD without a nonce";
pub const ERR_FUNGIBLE_TOKEN_EXPECTED: &str = "Fungible transfer must use an ESDT without a nonce";
pub const ERR_NON_FUNGIBLE_TOKEN_EXPECTED: &str = "Non-fungible transfer must use an ESDT with a nonce";
pub const ERR_ZERO_RECIPIENT: &str = "Recipient cannot be the zero address";
pub const ERR_ZERO_THRESHOLD: &str = "Vote thresholds must be at least one";
pub const ERR_ZERO_MAX_VOTE_PERIOD: &str = "Maximum vote period must be greater than zero";
pub const ERR_VOTE_PERIOD_BOUNDS: &str = "Minimum vote period exceeds maximum vote period";
pub const ERR_VOTE_CLOSE_TOO_EARLY: &str = "Vote close timestamp is before the minimum vote period";
pub const ERR_VOTE_CLOSE_TOO_LATE: &str = "Vote close timestamp is after the maximum vote period";
pub const ERR_VAULT_PROPERTY_NOT_SET: &str = "Vault property is not set";
pub const ERR_ZERO_SIGNATURES_REQUIRED: &str = "Signatures required must be at least one";
pub const ERR_INVALID_HASH_LENGTH: &str = "Message hash must be 32 bytes";
pub const ERR_NOT_SMART_CONTRACT: &str = "Protocol address must be a smart contract";
pub const ERR_VOTER_IN_BOTH_SETS: &str = "Address cannot vote both for and against";
pub const ERR_VOTER_NOT_MEMBER: &str = "Voter is not a member of the vault";
pub const ERR_TIMESTAMP_IN_FUTURE: &str = "Last for-vote timestamp cannot be in the future";

// ── State ──

pub const ERR_ALREADY_VOTED: &str = "Member has already voted";
pub const ERR_ALREADY_SIGNED: &str = "Member has already signed this message hash";
pub const ERR_ALREADY_ADMIN: &str = "Address is already an admin";
pub const ERR_ALREADY_MEMBER: &str = "Address is already a member";
pub const ERR_NOT_AN_ADMIN: &str = "Address is not an admin";
pub const ERR_NOT_A_MEMBER: &str = "Address is not a member";
pub const ERR_ADMIN_SELF_REMOVAL: &str = "Admin cannot remove itself";
pub const ERR_REQUEST_NOT_FOUND: &str = "Transfer request not found";
pub const ERR_VOTING_CLOSED: &str = "Voting period has closed";
pub const ERR_REQUEST_PENDING: &str = "Transfer request is pending";
pub const ERR_DELAY_NOT_MET: &str = "Transfer delay not met";
pub const ERR_VOTING_OPEN: &str = "Voting period has not closed";
pub const ERR_OPEN_REQUESTS_REMAIN: &str = "Open transfer requests must be resolved before swapping protocol";
pub const ERR_UNEXPECTED_STATUS: &str = "Protocol returned an unexpected status";
