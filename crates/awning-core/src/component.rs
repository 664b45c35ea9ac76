use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` is nearly identical to [`Model`](crate::Model) but with one key
/// difference: its [`view`](Component::view) method receives an `area: Rect`
/// parameter, making components composable within layouts. A parent model (or
/// another component) decides *where* each child renders by passing it a
/// sub-region of the frame.
///
/// For popup widgets the `area` doubles as the **trigger anchor**: the widget
/// draws its always-visible trigger inside `area` and, while open, anchors its
/// popup overlay to that rect. Overlays may intentionally paint outside
/// `area`.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message and use
/// [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use awning_core::{Model, Component, Command};
///
/// struct App { menu: Menu }
///
/// enum AppMsg { Menu(menu::Message) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<AppMsg>) { /* ... */ }
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Menu(m) => self.menu.update(m).map(AppMsg::Menu),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.menu.view(frame, trigger_area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it into the parent
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine their *base* rendering to the given
    /// rectangle; popup overlays anchored to it are the one sanctioned
    /// exception.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing. A parent can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
