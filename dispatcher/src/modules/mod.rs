use std::thread;
use std::time::Duration;

use crossbeam_channel::{select, unbounded};
use log::{info, warn};

use shared_resources::command::Command;
use shared_resources::config::DispatcherConfig;
use shared_resources::snapshot::Snapshot;

use crate::utilities::cycle;
use crate::utilities::error::DispatchError;
use crate::utilities::fsm::DecisionEngine;

mod debug;
mod network;

use debug::Debug;

const STALL_WARNING: Duration = Duration::from_secs(5);

pub fn run() -> Result<(), DispatchError> {
    // READ CONFIGURATION
    let config = DispatcherConfig::get()?;
    info!(
        "problem {} with {} elevators, {} floors, capacity {}",
        config.session.problem,
        config.session.elevator_count,
        config.dispatch.max_height,
        config.dispatch.max_capacity,
    );

    // OPEN SESSION
    let mut client = network::Client::new(&config.server)?;
    let start = client.start(&config.session)?;
    info!("session started with token {}", start.token);

    // INITIALIZE CHANNELS
    let (snapshot_tx, snapshot_rx) = unbounded::<Snapshot>();
    let (commands_tx, commands_rx) = unbounded::<Vec<Command>>();

    // INITIALIZE NETWORK MODULE
    thread::Builder::new().name("network".to_string()).spawn(move || network::main(
        client,
        snapshot_tx,
        commands_rx,
    ))?;

    let engine = DecisionEngine::new(config.dispatch);
    let mut debug = if config.debug { Some(Debug::new()) } else { None };

    loop {
        select! {
            recv(snapshot_rx) -> msg => {
                let snapshot = match msg {
                    Ok(snapshot) => snapshot,
                    Err(_) => {
                        info!("network loop finished, stopping dispatcher");
                        return Ok(())
                    }
                };
                // fatal errors are logged once, by the caller
                let report = cycle::run_cycle(&engine, &snapshot)?;
                match debug.as_mut() {
                    Some(debug) => {
                        if let Err(e) = debug.printstatus(&snapshot, &report) {
                            warn!("could not print status: {}", e);
                        }
                    },
                    None => info!("{}", report.summary()),
                }
                commands_tx.send(report.commands).map_err(|_| DispatchError::Channel)?;
            },
            default(STALL_WARNING) => {
                warn!("no snapshot received for {}s", STALL_WARNING.as_secs());
            }
        }
    }
}
