//! The interactive menu controller.
//!
//! [`Workflow`] sits in a single "awaiting menu selection" state. Each
//! [`MenuAction`] runs as a blocking sub-dialogue and then returns to the
//! menu. A blank line (or `0`) at the menu exits; a blank line anywhere
//! else cancels the current action.
//!
//! Errors raised inside an action are printed and the menu is shown again.
//! Only a failure of the terminal itself ends the session early.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use numanal_core::{is_duplicate, problem_size_from, time_is_valid, Program, Timing};
use numanal_runner::{Measure, RunnerError};
use numanal_storage::{StorageError, TimingStore};

use crate::console::Console;
use crate::plot::{Chart, PlotError, PlotSink, Series};
use crate::presenter;

/// Errors that abort a single menu action.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level menu entries, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddProgram,
    DeleteProgram,
    DisplayPrograms,
    AddTimingsManually,
    GenerateTimings,
    DisplayTimings,
    DeleteTimings,
    PlotTimings,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::AddProgram,
        MenuAction::DeleteProgram,
        MenuAction::DisplayPrograms,
        MenuAction::AddTimingsManually,
        MenuAction::GenerateTimings,
        MenuAction::DisplayTimings,
        MenuAction::DeleteTimings,
        MenuAction::PlotTimings,
    ];

    /// Looks up the action shown as `number` in the menu.
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&action| action == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddProgram => "Add a program to the database",
            MenuAction::DeleteProgram => "Delete a program from the database",
            MenuAction::DisplayPrograms => "Display all programs in the database",
            MenuAction::AddTimingsManually => "Manually add a program's timings to the database",
            MenuAction::GenerateTimings => {
                "Automatically generate and add a program's timings to the database"
            }
            MenuAction::DisplayTimings => "Display a program's timings in the database",
            MenuAction::DeleteTimings => "Delete all of a program's timings",
            MenuAction::PlotTimings => "Plot timings for programs",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.number(), self.label())
    }
}

/// Maps a 1-based ordinal onto an index into a listing of `count` entries.
pub fn select_ordinal(ordinal: i64, count: usize) -> Option<usize> {
    usize::try_from(ordinal)
        .ok()
        .filter(|&n| n >= 1 && n <= count)
        .map(|n| n - 1)
}

/// Menu-driven controller over a store, a runner and a plotting sink.
pub struct Workflow<S, M, P, R, W> {
    store: S,
    runner: M,
    plotter: P,
    console: Console<R, W>,
}

impl<S, M, P, R, W> Workflow<S, M, P, R, W>
where
    S: TimingStore,
    M: Measure,
    P: PlotSink,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, runner: M, plotter: P, console: Console<R, W>) -> Self {
        Workflow {
            store,
            runner,
            plotter,
            console,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn runner(&self) -> &M {
        &self.runner
    }

    pub fn plotter(&self) -> &P {
        &self.plotter
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(selection) = self
                .console
                .read_ints("Enter menu option number (BLANK line to exit) : ")?
            else {
                self.console.blank()?;
                return Ok(());
            };
            let &[number] = selection.as_slice() else {
                self.console.say("Enter a single menu option number")?;
                continue;
            };
            if number == 0 {
                self.console.blank()?;
                return Ok(());
            }
            let Some(action) = MenuAction::from_number(number) else {
                self.console.blank()?;
                self.console.say("BAD ENTRY!")?;
                continue;
            };

            debug!(?action, "menu action selected");
            match self.dispatch(action) {
                Ok(()) => {}
                Err(WorkflowError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!(?action, error = %e, "menu action failed");
                    self.console.blank()?;
                    self.console.say(format!("Error: {}", e))?;
                }
            }
        }
    }

    /// Runs one menu action to completion.
    pub fn dispatch(&mut self, action: MenuAction) -> Result<(), WorkflowError> {
        match action {
            MenuAction::AddProgram => self.add_program(),
            MenuAction::DeleteProgram => self.delete_program(),
            MenuAction::DisplayPrograms => self.display_programs().map(drop),
            MenuAction::AddTimingsManually => self.add_timings_manually(),
            MenuAction::GenerateTimings => self.generate_timings(),
            MenuAction::DisplayTimings => self.display_timings(),
            MenuAction::DeleteTimings => self.delete_timings(),
            MenuAction::PlotTimings => self.plot_timings(),
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.console.blank()?;
        for action in MenuAction::ALL {
            self.console.say(action)?;
        }
        self.console.blank()
    }

    // -----------------------------------------------------------------------
    // Shared steps
    // -----------------------------------------------------------------------

    /// Prints the program listing and returns it.
    fn display_programs(&mut self) -> Result<Vec<Program>, WorkflowError> {
        let programs = self.store.list_programs()?;
        self.console.blank()?;
        if programs.is_empty() {
            self.console.say("No programs in database")?;
        } else {
            self.console.say(presenter::program_table(&programs))?;
        }
        Ok(programs)
    }

    /// Lists programs and asks for one by ordinal. `None` when there is
    /// nothing to choose, the user cancels, or the ordinal is invalid.
    fn choose_program(&mut self) -> Result<Option<Program>, WorkflowError> {
        let programs = self.display_programs()?;
        if programs.is_empty() {
            return Ok(None);
        }
        self.console.blank()?;

        let Some(ordinals) = self
            .console
            .read_ints("Choose the program # (BLANK to cancel): ")?
        else {
            return Ok(None);
        };
        let &[ordinal] = ordinals.as_slice() else {
            self.console.say("Choose a single program #")?;
            return Ok(None);
        };
        match select_ordinal(ordinal, programs.len()) {
            Some(index) => Ok(programs.into_iter().nth(index)),
            None => {
                self.console.say("Invalid program #")?;
                Ok(None)
            }
        }
    }

    fn show_timings(&mut self, name: &str, timings: &[Timing]) -> io::Result<()> {
        self.console.blank()?;
        if timings.is_empty() {
            self.console.say(format!("{} has no timings in database", name))
        } else {
            self.console.say(presenter::timing_table(name, timings))
        }
    }

    fn report_duplicate_program(&mut self, existing: &Program) -> io::Result<()> {
        self.console.say(
            "PROGRAM IS ALREADY IN THE DATABASE. Delete it if you want to change its info.",
        )?;
        self.console.say(presenter::program_details(existing))?;
        self.console.blank()
    }

    /// Asks for one valid timing. `None` means cancel.
    fn read_time(&mut self) -> io::Result<Option<f64>> {
        loop {
            let Some(values) = self
                .console
                .read_floats("Enter a timing (nonnegative decimal, BLANK line to exit) : ")?
            else {
                return Ok(None);
            };
            let &[time] = values.as_slice() else {
                self.console.say("Enter a single timing")?;
                continue;
            };
            if !time_is_valid(time) {
                self.console.say("Timing needs to be >= 0")?;
                continue;
            }
            return Ok(Some(time));
        }
    }

    // -----------------------------------------------------------------------
    // Menu actions
    // -----------------------------------------------------------------------

    fn add_program(&mut self) -> Result<(), WorkflowError> {
        let programs = self.display_programs()?;
        self.console.blank()?;

        loop {
            self.console.say("Enter BLANK line to cancel")?;
            let Some(name) = self.console.read_text("New program name : ")? else {
                return Ok(());
            };
            if let Some(existing) = programs.iter().find(|p| p.name == name) {
                self.report_duplicate_program(existing)?;
                continue;
            }

            let Some(description) = self.console.read_text("Description : ")? else {
                return Ok(());
            };
            let Some(prefix) = self
                .console
                .read_text("Command line prefix (e.g. \"l2vecnorm\") : ")?
            else {
                return Ok(());
            };

            if !self.runner.executable_exists(&prefix) {
                self.console
                    .say("That executable file doesn't exist in the work directory!")?;
                if !self
                    .console
                    .confirm("Do you want to add the program anyway?")?
                {
                    return Ok(());
                }
            }

            let program = Program::new(name, description, prefix);
            match self.store.add_program(&program) {
                Ok(()) => {
                    self.console.blank()?;
                    self.console
                        .say(format!("Program \"{}\" added.", program.name))?;
                    return Ok(());
                }
                // Added by someone else since the listing was taken.
                Err(StorageError::DuplicateKey { name }) => {
                    let existing = self.store.get_program(&name)?;
                    self.report_duplicate_program(&existing)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn delete_program(&mut self) -> Result<(), WorkflowError> {
        let Some(program) = self.choose_program()? else {
            return Ok(());
        };
        let timing_count = self.store.list_timings(&program.name)?.len();
        self.store.delete_program(&program.name)?;

        self.console.blank()?;
        self.console.say(format!(
            "Program \"{}\" deleted ({} timings removed).",
            program.name, timing_count
        ))?;
        Ok(())
    }

    fn add_timings_manually(&mut self) -> Result<(), WorkflowError> {
        let Some(program) = self.choose_program()? else {
            return Ok(());
        };
        // Sizes recorded before and during this session.
        let mut recorded = self.store.list_timings(&program.name)?;
        self.show_timings(&program.name, &recorded)?;

        loop {
            self.console.blank()?;
            let Some(values) = self
                .console
                .read_ints("Enter a new problem size (positive integer, BLANK line to exit) : ")?
            else {
                return Ok(());
            };
            let &[value] = values.as_slice() else {
                self.console.say("Enter a single problem size")?;
                continue;
            };
            let Some(problem_size) = problem_size_from(value) else {
                self.console.say("Problem size needs to be > 0")?;
                continue;
            };
            if is_duplicate(problem_size, &recorded) {
                self.console.say(format!(
                    "Problem size {} already in database for the chosen program. SKIPPING",
                    problem_size
                ))?;
                continue;
            }

            let Some(time) = self.read_time()? else {
                return Ok(());
            };
            let timing = Timing::new(problem_size, time);
            self.store.add_timing(&program.name, timing)?;
            recorded.push(timing);
            self.console.say("Timing added to database")?;
        }
    }

    fn generate_timings(&mut self) -> Result<(), WorkflowError> {
        let Some(program) = self.choose_program()? else {
            return Ok(());
        };
        let prefix = self.store.get_command_line_prefix(&program.name)?;
        if !self.runner.executable_exists(&prefix) {
            self.console.blank()?;
            self.console.say(format!(
                "The \"{}\" external executable file doesn't exist in the work directory!",
                prefix
            ))?;
            return Ok(());
        }

        let mut recorded = self.store.list_timings(&program.name)?;
        self.show_timings(&program.name, &recorded)?;
        self.console.blank()?;

        let Some(values) = self.console.read_ints(
            "Enter problem sizes to generate timings for (e.g., 10 20 30 40, BLANK to cancel): ",
        )?
        else {
            return Ok(());
        };

        for value in values {
            let Some(problem_size) = problem_size_from(value) else {
                self.console
                    .say(format!("Problem size of {} is invalid", value))?;
                continue;
            };
            if is_duplicate(problem_size, &recorded) {
                self.console.say(format!(
                    "Problem size {} already in database for the chosen program. SKIPPING",
                    problem_size
                ))?;
                continue;
            }

            match self.runner.measure(&prefix, problem_size) {
                Ok(time) => {
                    let timing = Timing::new(problem_size, time);
                    self.store.add_timing(&program.name, timing)?;
                    recorded.push(timing);
                    self.console.say(format!(
                        "Timing for problem size {} = {} seconds",
                        problem_size,
                        presenter::format_seconds(time)
                    ))?;
                }
                Err(e) => {
                    warn!(program = %program.name, problem_size, error = %e, "measurement failed");
                    self.console.say(format!(
                        "Could not time problem size {}: {}",
                        problem_size, e
                    ))?;
                }
            }
        }
        self.console.blank()?;
        Ok(())
    }

    fn display_timings(&mut self) -> Result<(), WorkflowError> {
        let Some(program) = self.choose_program()? else {
            return Ok(());
        };
        let timings = self.store.list_timings(&program.name)?;
        self.show_timings(&program.name, &timings)?;
        Ok(())
    }

    fn delete_timings(&mut self) -> Result<(), WorkflowError> {
        let Some(program) = self.choose_program()? else {
            return Ok(());
        };
        let removed = self.store.delete_timings(&program.name)?;

        self.console.blank()?;
        if removed == 0 {
            self.console
                .say(format!("{} has no timings in database", program.name))?;
        } else {
            self.console
                .say(format!("{}'s {} timings deleted", program.name, removed))?;
        }
        Ok(())
    }

    fn plot_timings(&mut self) -> Result<(), WorkflowError> {
        let programs = self.display_programs()?;
        if programs.is_empty() {
            return Ok(());
        }
        self.console.blank()?;

        let Some(ordinals) = self.console.read_ints(
            "Enter program #'s to plot timings for (e.g., 2 3 4, BLANK to cancel): ",
        )?
        else {
            return Ok(());
        };

        let mut chart = Chart::timings();
        let mut chosen: Vec<usize> = Vec::new();
        for ordinal in ordinals {
            let Some(index) = select_ordinal(ordinal, programs.len()) else {
                self.console
                    .say(format!("{} is not a valid program #", ordinal))?;
                continue;
            };
            if chosen.contains(&index) {
                continue;
            }
            chosen.push(index);

            let program = &programs[index];
            let timings = self.store.list_timings(&program.name)?;
            if timings.is_empty() {
                self.console.say(format!(
                    "Program {} (#{}) has no timings",
                    program.name, ordinal
                ))?;
                continue;
            }
            chart
                .series
                .push(Series::from_timings(program.name.as_str(), &timings));
        }

        if chart.series.is_empty() {
            self.console.say("None of the programs have timings")?;
            return Ok(());
        }

        let written = self.plotter.plot(&chart)?;
        self.console.blank()?;
        match written {
            Some(path) => self.console.say(format!(
                "Plotted {} program(s) to {}",
                chart.series.len(),
                path.display()
            ))?,
            None => self
                .console
                .say(format!("Plotted {} program(s)", chart.series.len()))?,
        }
        Ok(())
    }
}
