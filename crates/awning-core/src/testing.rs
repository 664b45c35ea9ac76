use crate::command::{Action, Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` lets you exercise every part of the init/update/view cycle
/// in a plain `#[test]` function — no tokio runtime or TTY required.
/// Messages emitted via [`Command::message`] are collected and can be flushed
/// with [`drain_messages`](TestProgram::drain_messages); quit is recorded in
/// [`quit_requested`](TestProgram::quit_requested).
///
/// # Example
///
/// ```rust,ignore
/// use awning_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<MenuApp>::new(());
/// prog.event(TerminalEvent::Key(key(KeyCode::Enter))); // open the menu
/// prog.drain_messages();
/// assert!(prog.model().menu.is_open());
///
/// let output = prog.render_string(40, 10);
/// assert!(output.contains("Duplicate"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages produced by `init` are collected into the pending queue.
    /// Call [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Route a terminal event through [`Model::on_event`], then update.
    ///
    /// Mirrors exactly what the real event loop does with an incoming key or
    /// mouse event. Events the model maps to `None` are dropped.
    pub fn event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.on_event(event) {
            self.send(msg);
        }
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// The message is passed to [`Model::update`] immediately. Messages the
    /// update emits are enqueued; call
    /// [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process all pending messages produced by [`Command::message`].
    ///
    /// Repeatedly drains the pending queue, calling [`Model::update`] for
    /// each message, until no new messages are generated. Useful for
    /// command-chaining scenarios where one update produces a message that
    /// triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    ///
    /// This bypasses the normal message-driven update cycle, which can be
    /// useful for arranging test state before sending messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// Returns the raw buffer, which you can inspect cell-by-cell. For a
    /// simpler string-based assertion, see
    /// [`render_string`](TestProgram::render_string).
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Each row of the buffer is concatenated into a line; rows are separated
    /// by newlines. Trailing whitespace within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
        }
    }
}
