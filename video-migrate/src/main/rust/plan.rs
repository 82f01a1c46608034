//! Step planning for partial migration runs, independent of any database.

use crate::errors::{MigrationError, Result};

/// Versions an `up` run should apply, oldest first
///
/// `steps == 0` applies every pending version.
pub fn versions_to_apply(available: &[i64], applied: &[i64], steps: u32) -> Vec<i64> {
    let mut pending: Vec<i64> = available
        .iter()
        .copied()
        .filter(|version| !applied.contains(version))
        .collect();
    pending.sort_unstable();
    pending.dedup();

    if steps > 0 {
        pending.truncate(steps as usize);
    }
    pending
}

/// Version to undo down to: everything applied above it gets reverted
///
/// `steps == 0`, or more steps than applied migrations, reverts everything.
pub fn revert_target(applied: &[i64], steps: u32) -> i64 {
    let mut applied = applied.to_vec();
    applied.sort_unstable();
    applied.dedup();

    let steps = steps as usize;
    if steps == 0 || steps >= applied.len() {
        return 0;
    }
    applied[applied.len() - steps - 1]
}

/// Applied versions an undo to `target` will revert, newest first
pub fn versions_to_revert(applied: &[i64], target: i64) -> Vec<i64> {
    let mut reverted: Vec<i64> = applied.iter().copied().filter(|v| *v > target).collect();
    reverted.sort_unstable_by(|a, b| b.cmp(a));
    reverted.dedup();
    reverted
}

/// A positive step count is a hard request: running fewer than `steps` fails
pub fn ensure_step_limit(steps: u32, available: usize) -> Result<()> {
    if steps > 0 && available < steps as usize {
        return Err(MigrationError::ShortLimit {
            requested: steps,
            available,
        });
    }
    Ok(())
}
