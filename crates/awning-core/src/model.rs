use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// Every awning application implements `Model`. The runtime drives a
/// continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early messages.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal events (key presses, mouse, resize) arrive through
///    [`on_event`](Model::on_event), which maps each one to a message — or
///    `None` to ignore it.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further messages.
/// 5. Steps 2--4 repeat until the model returns [`Command::quit()`].
///
/// The runtime redraws after every processed message, so widget state and
/// what is on screen never drift apart — widgets stay pure state machines
/// and never trigger rendering themselves.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Every event that can affect the application state is represented as a
    /// variant of this type. Messages arrive from [`on_event`](Model::on_event)
    /// or from [`Command::message`].
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Map a terminal event to a message, or `None` to discard it.
    ///
    /// This is where the host routes raw key and pointer events to the
    /// widgets that should receive them — typically by wrapping the event in
    /// the focused child's message variant.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message>;

    /// Process a message, mutate state, and return a command for effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This method should be a pure function of `&self` — it reads the model
    /// state and draws widgets into the frame. The runtime calls `view` after
    /// every update and on the initial render.
    fn view(&self, frame: &mut Frame);
}
