use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use clap::{Arg, ArgMatches, Command};
use csv::{ReaderBuilder, Trim};
use log::info;
use thiserror::Error;

use rtsched::constants::{Horizon, OutputFormat, Policy};
use rtsched::core::{simulation, verdict};
use rtsched::report::{render_log, render_report, render_table};
use rtsched::{analyze, SchedulingCode, Task, TaskSet, TimeStep, ID};

/// Exit code for unreadable input or an invalid task set.
const EXIT_INPUT_ERROR: i32 = 5;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 3 fields (period, execution time, deadline), found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}: '{value}' is not an integer")]
    InvalidField { line: u64, value: String },

    #[error("line {line}: negative value {value}")]
    NegativeValue { line: u64, value: i64 },
}

fn parse_field(line: u64, value: &str) -> Result<TimeStep, ReadError> {
    let parsed: i64 = value.parse().map_err(|_| ReadError::InvalidField {
        line,
        value: value.to_string(),
    })?;
    TimeStep::try_from(parsed).map_err(|_| ReadError::NegativeValue { line, value: parsed })
}

/// Reads a task file: an optional header line, then `period execution_time deadline`
/// per line.
pub fn read_task_file(file_path: &Path, delimiter: u8) -> Result<Vec<Task>, ReadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_path(file_path)?;
    let mut tasks = Vec::new();

    let mut id: ID = 1;
    let mut first = true;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Repeated separators produce empty fields
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }

        // Header line (e.g. "P C D")
        if first && fields[0].parse::<i64>().is_err() {
            first = false;
            continue;
        }
        first = false;

        if fields.len() != 3 {
            return Err(ReadError::FieldCount { line, found: fields.len() });
        }

        let period = parse_field(line, fields[0])?;
        let wcet = parse_field(line, fields[1])?;
        let deadline = parse_field(line, fields[2])?;

        tasks.push(Task::new(id, period, wcet, deadline));
        id += 1;
    }

    Ok(tasks)
}

pub fn build_cli_command() -> Command {
    Command::new("rtsched")
        .version("0.1.0")
        .about("Simulates RM and EDF scheduling of periodic task sets on one processor")

        .arg(Arg::new("task_file")
            .required(true)
            .help("Path to the task set file (period, execution time, deadline per line)"))

        .arg(Arg::new("policy")
            .short('p')
            .long("policy")
            .help("Scheduling policy to test")
            .value_parser(["rm", "edf", "both"])
            .default_value("both"))

        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .help("How to print the simulated schedule")
            .value_parser(["table", "log", "none"])
            .default_value("table"))

        .arg(Arg::new("horizon")
            .short('H')
            .long("horizon")
            .help("Simulation length: hyperperiod (lcm) or largest deadline")
            .value_parser(["lcm", "max-deadline"])
            .default_value("lcm"))

        .arg(Arg::new("delimiter")
            .short('d')
            .long("delimiter")
            .help("Field separator of the task file")
            .default_value(" "))
}

#[derive(Debug)]
pub struct Config {
    task_file: PathBuf,
    policies: Vec<Policy>,
    format: OutputFormat,
    horizon: Horizon,
    delimiter: u8,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let task_file = matches
            .get_one::<String>("task_file")
            .context("missing task file")?
            .into();

        let policies = match matches.get_one::<String>("policy").map(String::as_str) {
            Some("rm") => vec![Policy::RateMonotonic],
            Some("edf") => vec![Policy::EarliestDeadlineFirst],
            _ => Policy::ALL.to_vec(),
        };

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("log") => OutputFormat::Log,
            Some("none") => OutputFormat::None,
            _ => OutputFormat::Table,
        };

        let horizon = match matches.get_one::<String>("horizon").map(String::as_str) {
            Some("max-deadline") => Horizon::MaxDeadline,
            _ => Horizon::Hyperperiod,
        };

        let delimiter = match matches.get_one::<String>("delimiter").map(String::as_bytes) {
            Some(b"tab") | Some(b"\\t") => b'\t',
            Some([byte]) => *byte,
            Some(other) => bail!(
                "delimiter must be a single byte, got '{}'",
                String::from_utf8_lossy(other)
            ),
            None => b' ',
        };

        Ok(Self { task_file, policies, format, horizon, delimiter })
    }
}

fn run(config: &Config) -> anyhow::Result<SchedulingCode> {
    let tasks = read_task_file(&config.task_file, config.delimiter)
        .with_context(|| format!("cannot read task file {}", config.task_file.display()))?;
    let taskset = TaskSet::new(tasks).context("invalid task set")?;
    info!("loaded {} task(s) from {}", taskset.len(), config.task_file.display());

    let mut worst = SchedulingCode::SchedulableSimulated;

    for &policy in config.policies.iter() {
        let report = analyze(&taskset, policy);
        println!("{}", render_report(&report));

        let schedule = simulation(&taskset, policy, config.horizon)?;
        match config.format {
            OutputFormat::Table => print!("{}", render_table(&schedule, &taskset)),
            OutputFormat::Log => print!("{}", render_log(&schedule, &taskset)),
            OutputFormat::None => {}
        }

        for miss in schedule.misses() {
            let id = taskset.get_task(miss.task()).map(|t| t.id()).unwrap_or_default();
            println!(
                "Task {} missed its deadline at {} ({} tick(s) left)",
                id,
                miss.deadline(),
                miss.remaining()
            );
        }

        let code = verdict(&report, &schedule);
        println!("{} -> {:?}\n", policy, code);
        worst = worst.max(code);
    }

    Ok(worst)
}

fn main() {
    // cargo run -- <task_file> [-p rm|edf|both] [-f table|log|none] [-H lcm|max-deadline] [-d <c>]
    // example : cargo run -- tasks.txt -p both -f log
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches: ArgMatches = build_cli_command().get_matches();

    let result = Config::from_matches(&matches).and_then(|config| run(&config));
    match result {
        Ok(code) => process::exit(code as i32),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EXIT_INPUT_ERROR);
        }
    }
}
