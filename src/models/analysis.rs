use gcd::Gcd;

use crate::constants::Policy;
use crate::scheduler::for_policy;

use super::TaskSet;

/// Exact check of `sum(C_i / T_i) <= 1` over reduced fractions.
///
/// Returns `None` if the common denominator outgrows `u128`.
fn utilisation_at_most_one(taskset: &TaskSet) -> Option<bool> {
    let (mut num, mut den): (u128, u128) = (0, 1);

    for task in taskset.iter() {
        let (wcet, period) = (task.wcet() as u128, task.period() as u128);
        let common = (den / den.gcd(period)).checked_mul(period)?;
        num = num
            .checked_mul(common / den)?
            .checked_add(wcet.checked_mul(common / period)?)?;
        den = common;

        let g = num.gcd(den);
        num /= g;
        den /= g;
        if num > den {
            return Some(false);
        }
    }

    Some(num <= den)
}

/// Result of the closed-form utilisation test for one policy.
///
/// For RM the test is the Liu & Layland bound, a sufficient condition only:
/// a set failing it may still be schedulable. For EDF with implicit
/// deadlines the test is exact.
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulabilityReport {
    pub policy: Policy,
    pub utilisation: f64,
    pub bound: f64,
    pub schedulable: bool,
}

/// Runs the utilisation test of `policy` over the static task parameters.
pub fn analyze(taskset: &TaskSet, policy: Policy) -> SchedulabilityReport {
    let bound = for_policy(policy).utilisation_bound(taskset.len());

    if taskset.is_empty() {
        return SchedulabilityReport {
            policy,
            utilisation: 0.0,
            bound,
            schedulable: true,
        };
    }

    let utilisation = taskset.utilisation();
    let schedulable = match policy {
        Policy::EarliestDeadlineFirst => {
            utilisation_at_most_one(taskset).unwrap_or(utilisation <= bound)
        }
        Policy::RateMonotonic => utilisation <= bound,
    };

    SchedulabilityReport {
        policy,
        utilisation,
        bound,
        schedulable,
    }
}
