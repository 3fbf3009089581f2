use std::fmt::Write;

use crate::constants::Policy;
use crate::{SchedulabilityReport, ScheduleRecord, TaskSet};

fn task_label(taskset: &TaskSet, index: usize) -> String {
    match taskset.get_task(index) {
        Some(task) => format!("Task {}", task.id()),
        None => format!("Task #{}", index),
    }
}

/// One line per tick: `Time t: Task k` or `Time t: Idle`.
pub fn render_log(schedule: &ScheduleRecord, taskset: &TaskSet) -> String {
    let mut out = String::new();
    for (t, slot) in schedule.slots().iter().enumerate() {
        let label = match slot {
            Some(index) => task_label(taskset, *index),
            None => "Idle".to_string(),
        };
        let _ = writeln!(out, "Time {}: {}", t, label);
    }
    out
}

/// Task × tick grid: `#` when the task ran, `.` otherwise.
pub fn render_table(schedule: &ScheduleRecord, taskset: &TaskSet) -> String {
    let labels: Vec<String> = (0..schedule.num_tasks())
        .map(|index| task_label(taskset, index))
        .chain(std::iter::once("Idle".to_string()))
        .collect();
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    let ticks: String = (0..schedule.end_time()).map(|t| char::from(b'0' + (t % 10) as u8)).collect();
    let _ = writeln!(out, "{:width$} | {}", "", ticks, width = width);

    let occupancy = schedule.occupancy();
    let n = schedule.num_tasks();
    for (index, label) in labels.iter().take(n).enumerate() {
        let row: String = (0..schedule.end_time())
            .map(|t| if occupancy[t * n + index] { '#' } else { '.' })
            .collect();
        let _ = writeln!(out, "{:width$} | {}", label, row, width = width);
    }

    let idle: String = schedule
        .slots()
        .iter()
        .map(|slot| if slot.is_none() { '#' } else { '.' })
        .collect();
    let _ = writeln!(out, "{:width$} | {}", labels[n], idle, width = width);
    out
}

/// Utilisation, bound and outcome of the closed-form test.
pub fn render_report(report: &SchedulabilityReport) -> String {
    let relation = if report.schedulable { "<=" } else { ">" };
    let outcome = match (report.policy, report.schedulable) {
        (Policy::RateMonotonic, true) => "schedulable under RM",
        (Policy::RateMonotonic, false) => "NOT guaranteed schedulable under RM (sufficient test only)",
        (Policy::EarliestDeadlineFirst, true) => "schedulable under EDF",
        (Policy::EarliestDeadlineFirst, false) => "NOT schedulable under EDF",
    };
    format!(
        "{}: U = {:.4} {} {:.4} -> task set is {}",
        report.policy, report.utilisation, relation, report.bound, outcome
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Horizon;
    use crate::core::simulation;
    use crate::{analyze, Task};

    fn two_tasks() -> TaskSet {
        TaskSet::new(vec![Task::new(1, 4, 1, 4), Task::new(2, 5, 2, 5)]).unwrap()
    }

    #[test]
    fn test_render_log() {
        let taskset = two_tasks();
        let schedule = simulation(&taskset, Policy::RateMonotonic, Horizon::MaxDeadline).unwrap();
        let log = render_log(&schedule, &taskset);
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Time 0: Task 1",
                "Time 1: Task 2",
                "Time 2: Task 2",
                "Time 3: Idle",
                "Time 4: Task 1",
            ]
        );
    }

    #[test]
    fn test_render_table() {
        let taskset = two_tasks();
        let schedule = simulation(&taskset, Policy::RateMonotonic, Horizon::MaxDeadline).unwrap();
        let table = render_table(&schedule, &taskset);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines,
            vec![
                "       | 01234",
                "Task 1 | #...#",
                "Task 2 | .##..",
                "Idle   | ...#.",
            ]
        );
    }

    #[test]
    fn test_render_report() {
        let report = analyze(&two_tasks(), Policy::RateMonotonic);
        assert_eq!(
            render_report(&report),
            "RM: U = 0.6500 <= 0.8284 -> task set is schedulable under RM"
        );
    }
}
