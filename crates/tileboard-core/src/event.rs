#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The board consumes two device streams: keyboard events with a logical key
//! identity, and pointer events carrying a position, button flags, and a
//! signed wheel delta. Host applications translate their native events into
//! these types; terminal hosts can use [`Event::from_crossterm`].
//!
//! # Design Notes
//!
//! - Pointer coordinates share the render surface space used by
//!   [`Rect`](crate::geometry::Rect).
//! - `KeyEventKind` defaults to `Press` when the source cannot distinguish.
//! - A positive wheel delta scrolls forward (toward later content).
//! - `KeyEvent::handled` lets the host and the board mark an event consumed.

use bitflags::bitflags;
#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (mouse) event.
    Pointer(PointerEvent),
}

impl Event {
    /// Convert a Crossterm event into a board [`Event`].
    ///
    /// Events the board has no use for (resize, focus, paste) map to `None`.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        map_crossterm_event_internal(event)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The logical key.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,

    /// Set once some consumer has fully dealt with the event.
    pub handled: bool,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
            handled: false,
        }
    }

    /// Create a release event for `code`.
    #[must_use]
    pub const fn release(code: KeyCode) -> Self {
        Self::new(code).with_kind(KeyEventKind::Release)
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a release event.
    #[must_use]
    pub const fn is_release(&self) -> bool {
        matches!(self.kind, KeyEventKind::Release)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Logical key identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key (acts as "Back").
    Backspace,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

bitflags! {
    /// Pointer buttons clicked in a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// No button.
        const NONE   = 0b000;
        /// Primary (left) button.
        const LEFT   = 0b001;
        /// Secondary (right) button.
        const RIGHT  = 0b010;
        /// Middle button (wheel click).
        const MIDDLE = 0b100;
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event: position, clicked buttons, and wheel movement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// X coordinate on the render surface.
    pub x: f32,

    /// Y coordinate on the render surface.
    pub y: f32,

    /// Buttons clicked with this event.
    pub buttons: PointerButtons,

    /// Signed wheel delta in notches; positive scrolls forward.
    pub wheel: i32,
}

impl PointerEvent {
    /// Create a plain pointer-move event at a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            buttons: PointerButtons::NONE,
            wheel: 0,
        }
    }

    /// Create a pointer event with clicked buttons.
    #[must_use]
    pub const fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Create a pointer event with a wheel delta.
    #[must_use]
    pub const fn with_wheel(mut self, wheel: i32) -> Self {
        self.wheel = wheel;
        self
    }

    /// Whether the primary button was clicked.
    #[must_use]
    pub const fn left(&self) -> bool {
        self.buttons.contains(PointerButtons::LEFT)
    }

    /// Whether the secondary button was clicked.
    #[must_use]
    pub const fn right(&self) -> bool {
        self.buttons.contains(PointerButtons::RIGHT)
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_crossterm_event_internal(event: cte::Event) -> Option<Event> {
    match event {
        cte::Event::Key(key) => map_key_event(key).map(Event::Key),
        cte::Event::Mouse(mouse) => Some(Event::Pointer(map_mouse_event(mouse))),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_event(event: cte::KeyEvent) -> Option<KeyEvent> {
    let code = map_key_code(event.code)?;
    Some(
        KeyEvent::new(code)
            .with_modifiers(map_modifiers(event.modifiers))
            .with_kind(map_key_kind(event.kind)),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_key_code(code: cte::KeyCode) -> Option<KeyCode> {
    match code {
        cte::KeyCode::Backspace => Some(KeyCode::Backspace),
        cte::KeyCode::Enter => Some(KeyCode::Enter),
        cte::KeyCode::Left => Some(KeyCode::Left),
        cte::KeyCode::Right => Some(KeyCode::Right),
        cte::KeyCode::Up => Some(KeyCode::Up),
        cte::KeyCode::Down => Some(KeyCode::Down),
        cte::KeyCode::PageUp => Some(KeyCode::PageUp),
        cte::KeyCode::PageDown => Some(KeyCode::PageDown),
        cte::KeyCode::Char(c) => Some(KeyCode::Char(c)),
        cte::KeyCode::Esc => Some(KeyCode::Escape),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    if modifiers.contains(cte::KeyModifiers::SUPER)
        || modifiers.contains(cte::KeyModifiers::HYPER)
        || modifiers.contains(cte::KeyModifiers::META)
    {
        mapped |= Modifiers::SUPER;
    }
    mapped
}

/// Terminal mice report discrete events; only a button going down counts as
/// a click, and vertical scrolling becomes a one-notch wheel delta.
#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_event(event: cte::MouseEvent) -> PointerEvent {
    let (buttons, wheel) = match event.kind {
        cte::MouseEventKind::Down(button) => (map_mouse_button(button), 0),
        cte::MouseEventKind::ScrollDown => (PointerButtons::NONE, 1),
        cte::MouseEventKind::ScrollUp => (PointerButtons::NONE, -1),
        cte::MouseEventKind::Up(_)
        | cte::MouseEventKind::Drag(_)
        | cte::MouseEventKind::Moved
        | cte::MouseEventKind::ScrollLeft
        | cte::MouseEventKind::ScrollRight => (PointerButtons::NONE, 0),
    };

    PointerEvent::new(f32::from(event.column), f32::from(event.row))
        .with_buttons(buttons)
        .with_wheel(wheel)
}

#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_button(button: cte::MouseButton) -> PointerButtons {
    match button {
        cte::MouseButton::Left => PointerButtons::LEFT,
        cte::MouseButton::Right => PointerButtons::RIGHT,
        cte::MouseButton::Middle => PointerButtons::MIDDLE,
    }
}
