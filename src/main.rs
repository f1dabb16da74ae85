use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info};

use schedsim::config::{Command, Config, InputSource, USAGE};
use schedsim::input::load_processes_from_path;
use schedsim::models::Process;
use schedsim::report::render;
use schedsim::scheduler::{run_all, Scheduler};
use schedsim::telemetry::init_tracing;
use schedsim::workload::WorkloadGenerator;

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("warning: could not initialize logging: {e}");
    }

    let command = match Config::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("schedsim: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Run(config) => match run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                debug!(error = %e, "run failed");
                eprintln!("schedsim: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(config: &Config) -> Result<()> {
    let processes = load(&config.input)?;
    info!(
        processes = processes.len(),
        algorithms = config.algorithms.len(),
        quantum = config.quantum,
        "starting simulation"
    );

    let schedulers: Vec<Box<dyn Scheduler>> = config
        .algorithms
        .iter()
        .map(|a| a.scheduler(config.quantum))
        .collect();
    let results = run_all(&schedulers, &processes).context("simulation failed")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out, &results, config.format).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}

fn load(input: &InputSource) -> Result<Vec<Process>> {
    match input {
        InputSource::File(path) => {
            load_processes_from_path(path).context("failed to load processes")
        }
        InputSource::Random { count, seed } => {
            Ok(WorkloadGenerator::new(*count).with_seed(*seed).generate())
        }
    }
}
