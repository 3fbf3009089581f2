use log::{debug, info, warn};

use crate::constants::{Horizon, Policy, SchedulingCode};
use crate::errors::SchedulingError;
use crate::scheduler::{for_policy, Scheduler};
use crate::{DeadlineMiss, SchedulabilityReport, ScheduleRecord, TaskSet, TimeStep};

fn report_misses(taskset: &TaskSet, misses: &[DeadlineMiss], t: TimeStep) {
    for miss in misses {
        let id = taskset.get_task(miss.task()).map(|task| task.id()).unwrap_or_default();
        warn!(
            "time {}: task {} missed deadline {} with {} tick(s) left",
            t,
            id,
            miss.deadline(),
            miss.remaining()
        );
    }
}

/// Drives `taskset` from tick 0 to `end_time - 1` under `scheduler`.
///
/// Each tick: releases are applied to every task, the scheduler elects at
/// most one active task, and the elected task runs for one tick. Unfinished
/// jobs are overwritten at their next release; such overruns only show up
/// in the record's deadline misses.
pub fn run<S>(taskset: &mut TaskSet, end_time: TimeStep, scheduler: &S) -> ScheduleRecord
where
    S: Scheduler + ?Sized,
{
    let mut schedule = ScheduleRecord::new(scheduler.policy(), taskset.len(), end_time);

    for t in 0..end_time {
        // Check for missed deadlines before the release overwrites them
        let mut misses = taskset.expired_jobs(t);
        misses.extend(taskset.abandoned_jobs(t));
        report_misses(taskset, &misses, t);
        schedule.record_misses(misses);

        let released = taskset.release_jobs(t);
        if !released.is_empty() {
            debug!("time {}: released {:?}", t, released);
        }

        let elected = scheduler.select(taskset.get_tasks(), t);
        if let Some(index) = elected {
            taskset.execute(index);
        }
        debug!("time {}: {:?}", t, elected);
        schedule.push(elected);
    }

    let misses = taskset.expired_jobs(end_time);
    report_misses(taskset, &misses, end_time);
    schedule.record_misses(misses);

    schedule
}

/// Simulates a fresh copy of `taskset` under `policy` over the chosen horizon.
///
/// The caller's task set is never mutated, so several policies can be run
/// from the same input.
pub fn simulation(
    taskset: &TaskSet,
    policy: Policy,
    horizon: Horizon,
) -> Result<ScheduleRecord, SchedulingError> {
    let end_time = taskset.horizon(horizon)?;
    let mut tasks = taskset.clone();
    tasks.reset();

    info!("{} simulation over [0, {}) with {} task(s)", policy, end_time, tasks.len());
    let schedule = run(&mut tasks, end_time, for_policy(policy));
    info!(
        "{} simulation done: {} idle tick(s), {} deadline miss(es)",
        policy,
        schedule.idle_ticks(),
        schedule.misses().len()
    );

    Ok(schedule)
}

/// Combines the utilisation test and the simulated schedule.
pub fn verdict(report: &SchedulabilityReport, schedule: &ScheduleRecord) -> SchedulingCode {
    if report.schedulable {
        return SchedulingCode::SchedulableShortcut;
    }
    // The EDF utilisation test is exact
    if report.policy == Policy::EarliestDeadlineFirst {
        return SchedulingCode::UnschedulableShortcut;
    }
    if schedule.has_misses() {
        SchedulingCode::UnschedulableSimulated
    } else {
        SchedulingCode::SchedulableSimulated
    }
}
