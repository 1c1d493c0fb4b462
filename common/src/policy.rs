//! Timing and quorum rules of the transfer-request protocols.
//!
//! Everything here is plain arithmetic over vote counts and timestamps, so
//! the contracts only have to load storage, call into a [`VotingPolicy`],
//! and turn the outcome into a status or a reason string.

use crate::errors::*;
use crate::types::{DelayPoll, DelayVaultProperty, TransferRequestStatus, WindowPoll, WindowVaultProperty};

/// Vote counts of a single request.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Tally {
    pub votes_for: u64,
    pub votes_against: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PendingReason {
    /// Neither quorum reached.
    AwaitingVotes,
    /// For-quorum reached, countdown still running.
    DelayNotMet,
    /// Window variant, close timestamp not reached.
    VotingOpen,
}

impl PendingReason {
    pub fn message(&self) -> &'static str {
        match self {
            PendingReason::AwaitingVotes => ERR_REQUEST_PENDING,
            PendingReason::DelayNotMet => ERR_DELAY_NOT_MET,
            PendingReason::VotingOpen => ERR_VOTING_OPEN,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Pending(PendingReason),
    Approved,
    Denied,
}

impl Verdict {
    pub fn status(&self) -> TransferRequestStatus {
        match self {
            Verdict::Pending(_) => TransferRequestStatus::Pending,
            Verdict::Approved => TransferRequestStatus::Approved,
            Verdict::Denied => TransferRequestStatus::Denied,
        }
    }
}

/// A per-vault policy that decides requests from their tally and timing.
///
/// New timing variants implement this trait next to their own property and
/// poll types; the vault only ever sees the resulting status.
pub trait VotingPolicy {
    type Poll;

    fn validate(&self) -> Result<(), &'static str>;

    fn verdict(&self, poll: &Self::Poll, tally: &Tally, created: u64, now: u64) -> Verdict;

    /// Whether a vote may still be cast at `now`.
    fn check_vote_allowed(&self, _poll: &Self::Poll, _now: u64) -> Result<(), &'static str> {
        Ok(())
    }
}

fn check_thresholds(vote_for_required: u64, vote_against_required: u64) -> Result<(), &'static str> {
    if vote_for_required == 0 || vote_against_required == 0 {
        return Err(ERR_ZERO_THRESHOLD);
    }
    Ok(())
}

// ============================================================
// Delay variant
// ============================================================

impl DelayVaultProperty {
    /// Moves the countdown anchor to `now` when this for-vote is the one that
    /// lifts the tally to the for-quorum.
    pub fn anchor_after_for_vote(&self, poll: &DelayPoll, votes_for_before: u64, now: u64) -> DelayPoll {
        let votes_for_after = votes_for_before + 1;
        if votes_for_before < self.vote_for_required && votes_for_after >= self.vote_for_required {
            DelayPoll {
                last_for_vote_timestamp: now,
            }
        } else {
            *poll
        }
    }
}

impl VotingPolicy for DelayVaultProperty {
    type Poll = DelayPoll;

    fn validate(&self) -> Result<(), &'static str> {
        check_thresholds(self.vote_for_required, self.vote_against_required)
    }

    fn verdict(&self, poll: &DelayPoll, tally: &Tally, created: u64, now: u64) -> Verdict {
        if tally.votes_against >= self.vote_against_required {
            return Verdict::Denied;
        }
        if tally.votes_for < self.vote_for_required {
            return Verdict::Pending(PendingReason::AwaitingVotes);
        }

        // No decisive vote recorded when quorum was reached through an
        // admin threshold change; fall back to the creation time.
        let anchor = if poll.last_for_vote_timestamp == 0 {
            created
        } else {
            poll.last_for_vote_timestamp
        };
        if now >= anchor.saturating_add(self.transfer_delay_seconds) {
            Verdict::Approved
        } else {
            Verdict::Pending(PendingReason::DelayNotMet)
        }
    }
}

// ============================================================
// Window variant
// ============================================================

impl WindowVaultProperty {
    pub fn check_vote_close_timestamp(&self, vote_close_timestamp: u64, now: u64) -> Result<(), &'static str> {
        if vote_close_timestamp < now.saturating_add(self.min_vote_period_seconds) {
            return Err(ERR_VOTE_CLOSE_TOO_EARLY);
        }
        if vote_close_timestamp > now.saturating_add(self.max_vote_period_seconds) {
            return Err(ERR_VOTE_CLOSE_TOO_LATE);
        }
        Ok(())
    }
}

impl VotingPolicy for WindowVaultProperty {
    type Poll = WindowPoll;

    fn validate(&self) -> Result<(), &'static str> {
        check_thresholds(self.vote_for_required, self.vote_against_required)?;
        if self.max_vote_period_seconds == 0 {
            return Err(ERR_ZERO_MAX_VOTE_PERIOD);
        }
        if self.min_vote_period_seconds > self.max_vote_period_seconds {
            return Err(ERR_VOTE_PERIOD_BOUNDS);
        }
        Ok(())
    }

    /// Denial may land before the close; approval never does.
    fn verdict(&self, poll: &WindowPoll, tally: &Tally, _created: u64, now: u64) -> Verdict {
        if tally.votes_against >= self.vote_against_required {
            return Verdict::Denied;
        }
        if now < poll.vote_close_timestamp {
            return Verdict::Pending(PendingReason::VotingOpen);
        }

        if tally.votes_for >= self.vote_for_required {
            Verdict::Approved
        } else {
            Verdict::Denied
        }
    }

    fn check_vote_allowed(&self, poll: &WindowPoll, now: u64) -> Result<(), &'static str> {
        if now >= poll.vote_close_timestamp {
            return Err(ERR_VOTING_CLOSED);
        }
        Ok(())
    }
}
