//! Core plumbing for the **awning** popup widget library.
//!
//! `awning-core` provides the traits, types, and host runtime that the
//! widgets in `awning-widgets` plug into. The design follows the
//! [Elm Architecture]: a program is expressed as a pure
//! **init -> update -> view** cycle, with widget outputs (committed
//! selections, dismissals, open/close transitions) reported through
//! [`Command`]s rather than callbacks.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / on_event / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Message emission and program lifecycle actions |
//! | [`TerminalEvent`] | Key / mouse / resize events delivered by the runtime |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! # Architecture
//!
//! 1. **init** -- [`Model::init`] creates the initial state.
//! 2. **view** -- the runtime calls [`Model::view`] to render the current
//!    state to a [`ratatui::Frame`].
//! 3. **event** -- key and pointer events arrive from the terminal; the
//!    model's [`on_event`](Model::on_event) maps each one to a message and
//!    thereby routes it to the widget that should handle it.
//! 4. **update** -- [`Model::update`] receives a message, mutates state, and
//!    optionally returns a [`Command`] carrying follow-up messages.
//! 5. **repeat** -- the runtime re-renders after every update, so widget
//!    state machines stay pure and never trigger rendering themselves.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};

/// Run an awning application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
