//! Pari-mutuel settlement
//!
//! Winners split the losing side's pool in proportion to their stake.
//! Payouts are floored, multiplying before dividing, so results are exact
//! integers; the rounding remainder is left undistributed. Winning stakes
//! were debited at placement and are not refunded here.

use super::{Ledger, PoolSplit, Settlement, SettlementError};
use crate::entry::Entry;
use crate::wager::{decode_all, Side, Wager};
use chrono::{DateTime, Utc};

/// Winning side for an arrival against a line: Over only when strictly late
pub fn resolve_outcome(line_time: DateTime<Utc>, arrived_time: DateTime<Utc>) -> Side {
    if arrived_time > line_time {
        Side::Over
    } else {
        Side::Under
    }
}

/// Split decoded wagers into per-bettor profit and loss for `outcome`
///
/// Returns `None` when a side's total stake overflows `u64`.
pub fn split_pool(outcome: Side, wagers: &[Wager]) -> Option<PoolSplit> {
    let mut over_pool: u64 = 0;
    let mut under_pool: u64 = 0;
    for wager in wagers {
        match wager.side {
            Side::Over => over_pool = over_pool.checked_add(wager.stake)?,
            Side::Under => under_pool = under_pool.checked_add(wager.stake)?,
        }
    }

    let (winning_pool, losing_pool) = match outcome {
        Side::Over => (over_pool, under_pool),
        Side::Under => (under_pool, over_pool),
    };

    let mut profit_by_bettor = Ledger::new();
    let mut loss_by_bettor = Ledger::new();

    for wager in wagers {
        if wager.side == outcome {
            // Empty winning pool means no winning wagers reach here
            let profit = u128::from(wager.stake) * u128::from(losing_pool)
                / u128::from(winning_pool);
            // stake <= winning_pool, so profit <= losing_pool
            *profit_by_bettor.entry(wager.bettor.clone()).or_insert(0) += profit as u64;
        } else {
            *loss_by_bettor.entry(wager.bettor.clone()).or_insert(0) += wager.stake;
        }
    }

    Some(PoolSplit {
        over_pool,
        under_pool,
        profit_by_bettor,
        loss_by_bettor,
    })
}

/// Settle an arrived entry's pool
///
/// Fails without touching the entry when it has no arrival, was already
/// settled, or holds a malformed wager token. On success the entry is marked
/// settled so a second call is rejected.
pub fn settle(entry: &mut Entry) -> Result<Settlement, SettlementError> {
    let settlement = compute(entry)?;
    entry.settled = true;

    tracing::info!(
        entry_id = %settlement.entry_id,
        outcome = %settlement.outcome,
        delta_seconds = settlement.delta_seconds,
        over_pool = settlement.over_pool,
        under_pool = settlement.under_pool,
        distributed = settlement.distributed(),
        "Entry settled"
    );
    if settlement.is_forfeit() && settlement.losing_pool() > 0 {
        tracing::warn!(
            entry_id = %settlement.entry_id,
            forfeited = settlement.losing_pool(),
            "No wagers on winning side, losing pool forfeited"
        );
    }

    Ok(settlement)
}

fn compute(entry: &Entry) -> Result<Settlement, SettlementError> {
    if entry.settled {
        return Err(SettlementError::AlreadySettled(entry.id));
    }
    let arrived_time = entry
        .arrived_time
        .ok_or(SettlementError::NotArrived(entry.id))?;

    let wagers = decode_all(&entry.wagers).map_err(|source| SettlementError::Wager {
        entry_id: entry.id,
        source,
    })?;
    let outcome = resolve_outcome(entry.line_time, arrived_time);
    let split = split_pool(outcome, &wagers).ok_or(SettlementError::PoolOverflow(entry.id))?;

    Ok(Settlement {
        entry_id: entry.id,
        outcome,
        line_time: entry.line_time,
        arrived_time,
        delta_seconds: (arrived_time - entry.line_time).num_seconds(),
        over_pool: split.over_pool,
        under_pool: split.under_pool,
        profit_by_bettor: split.profit_by_bettor,
        loss_by_bettor: split.loss_by_bettor,
    })
}
