use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events delivered to the model by the [`Program`](crate::Program)
/// event loop.
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload,
/// so you can pattern-match on key codes, mouse buttons, and modifiers using
/// the full crossterm API. Popup widgets consume [`Key`](TerminalEvent::Key)
/// for navigation and [`Mouse`](TerminalEvent::Mouse) for trigger clicks,
/// item clicks, and outside-click dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard press event.
    Key(KeyEvent),
    /// A mouse event (button, wheel, or motion).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, discarding variants the library does
    /// not route (focus reporting, bracketed paste, key release/repeat).
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => Some(TerminalEvent::Key(k)),
            Event::Key(_) => None,
            Event::Mouse(m) => Some(TerminalEvent::Mouse(m)),
            Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            _ => None,
        }
    }
}
