//! Progress of allocated amounts against targets and savings goals

/// Allocated amount as a percentage of its target. Not clamped.
pub fn target_performance(amount: f64, target: f64) -> f64 {
    if target > 0.0 {
        amount / target * 100.0
    } else {
        0.0
    }
}

/// Savings goal completion in percent, capped at 100
pub fn goal_progress(balance: f64, target: f64) -> f64 {
    target_performance(balance, target).min(100.0)
}

/// Amount still missing to reach the target, never negative
pub fn remaining_to_target(balance: f64, target: f64) -> f64 {
    (target - balance).max(0.0)
}
