use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, Result, ExecutableCommand};

use shared_resources::command::Command;
use shared_resources::snapshot::Snapshot;

use crate::utilities::cycle::CycleReport;

const HEADER_SIZE: u16 = 9;

pub struct Debug {
    stdout: Stdout,
    lines_printed: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug { 
            stdout: stdout(),
            lines_printed: 0,
        }
    }

    pub fn printstatus(&mut self, snapshot: &Snapshot, report: &CycleReport) -> Result<()> {
        if self.lines_printed > 0 {
            self.stdout.execute(cursor::MoveUp(self.lines_printed))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| CYCLE                   |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "TIMESTAMP", snapshot.timestamp)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "WAITING", report.remaining.len())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "BOARDED", report.boarded.len())?;
        writeln!(self.stdout, "+------------+------------+\n")?;

        writeln!(self.stdout, "+------------+------------+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} |", "ELEVATOR", "FLOOR", "STATUS", "PASSENGERS", "COMMAND")?;
        for (elevator, command) in snapshot.elevators.iter().zip(&report.commands) {
            writeln!(self.stdout, "+------------+------------+------------+------------+------------+")?;
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} |",
                elevator.id,
                elevator.floor,
                elevator.status.as_string(),
                elevator.passengers.len(),
                describe(command))?;
        }
        writeln!(self.stdout, "+------------+------------+------------+------------+------------+")?;

        self.lines_printed = HEADER_SIZE + 1 + 3 + 2 * report.commands.len() as u16;
        self.stdout.flush()?;
        Ok(())
    }
}

fn describe(command: &Command) -> String {
    match command.call_ids() {
        Some(ids) => format!("{} x{}", command.command.as_string(), ids.len()),
        None => command.command.as_string(),
    }
}
