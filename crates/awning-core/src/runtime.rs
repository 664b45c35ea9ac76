use crate::command::{Action, Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{stdout, Stdout, Write};

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// All fields have sensible defaults (see [`Default`] impl). Use struct
/// update syntax to override only the options you need:
///
/// # Example
///
/// ```rust,ignore
/// use awning_core::ProgramOptions;
///
/// let opts = ProgramOptions {
///     title: Some("Demo".into()),
///     log_file: Some("debug.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Capture mouse events (default: true — outside-click dismissal and
    /// trigger/item clicks need pointer-down events).
    pub mouse_capture: bool,
    /// Set terminal title.
    pub title: Option<String>,
    /// Whether to catch panics and restore terminal (default: true).
    pub catch_panics: bool,
    /// Log file path for debugging TUI apps (the screen is busy rendering,
    /// so milestones go to an append-only file instead of stdout).
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            mouse_capture: true,
            title: None,
            catch_panics: true,
            log_file: None,
        }
    }
}

/// The program runtime. Manages terminal setup, the event loop, and the
/// full [`Model`] lifecycle.
///
/// `Program` wires a [`Model`] to a real terminal via [`ratatui`]/
/// [`crossterm`] and drives the init/update/view loop until the model
/// returns [`Command::quit()`] or the process receives ctrl-c.
///
/// # Example
///
/// ```rust,ignore
/// use awning_core::{Program, ProgramError};
///
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<MyApp>::new(())?.run().await?;
///     // `model` is the final state after quit
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    queue: VecDeque<M::Message>,
    options: ProgramOptions,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let log_file = match options.log_file {
            Some(ref path) => Some(log_to_file(path)?),
            None => None,
        };

        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            queue: VecDeque::new(),
            options,
            should_quit: false,
            log_file,
        };

        program.debug_log("program initialized");
        program.execute_command(init_cmd);
        Ok(program)
    }

    /// Run the program. Blocks until quit, then returns the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        self.event_loop().await?;
        self.debug_log("shutting down");
        restore_terminal(&self.options)?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        // Messages queued by init
        self.drain_queue();
        self.render()?;
        if self.should_quit {
            return Ok(());
        }

        let mut events = EventStream::new();

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c() => {
                    self.debug_log("received ctrl+c signal");
                    return Ok(());
                }

                maybe_event = events.next() => {
                    let Some(event_result) = maybe_event else {
                        // Event stream closed; nothing more will arrive
                        return Ok(());
                    };
                    let Ok(raw) = event_result else {
                        continue;
                    };
                    if let Some(event) = TerminalEvent::from_crossterm(raw) {
                        if let Some(msg) = self.model.on_event(event) {
                            self.queue.push_back(msg);
                        }
                    }
                    self.drain_queue();
                    if self.should_quit {
                        return Ok(());
                    }
                    self.render()?;
                }
            }
        }
    }

    /// Process every queued message, including messages produced while
    /// draining. Each update's commands run to completion before the next
    /// render, so one input event observes a consistent model.
    fn drain_queue(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            let cmd = self.model.update(msg);
            self.execute_command(cmd);
            if self.should_quit {
                return;
            }
        }
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.queue.push_back(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.should_quit = true;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    /// Write a debug message to the log file, if configured.
    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install panic hook that restores terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), std::io::Error> {
    // Best-effort cleanup: continue even if individual steps fail, so we
    // restore as much terminal state as possible.
    let r1 = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    r1
}

/// Open a log file for debugging TUI applications.
///
/// Returns a file handle that can be used with `writeln!`. The file is
/// opened in append mode. [`ProgramOptions::log_file`] uses this under the
/// hood; it is exported for apps that want the same sink for their own
/// diagnostics.
///
/// # Example
///
/// ```no_run
/// use awning_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("debug.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
