use crate::element::Element;
use crate::hit::hit_test_any;
use crate::layout::LayoutResult;

/// Pointer events with element targeting.
///
/// `target` is the deepest element under the pointer, or None when the
/// pointer is over empty space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed
    Down {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Button released
    Up {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Press and release on the same element
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved, with or without a button held
    Move {
        target: Option<String>,
        x: u16,
        y: u16,
    },
}

/// Discriminant of a [`PointerEvent`], used by listeners to filter the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Up,
    Click,
    Move,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl PointerEvent {
    pub fn kind(&self) -> PointerKind {
        match self {
            Self::Down { .. } => PointerKind::Down,
            Self::Up { .. } => PointerKind::Up,
            Self::Click { .. } => PointerKind::Click,
            Self::Move { .. } => PointerKind::Move,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Down { target, .. }
            | Self::Up { target, .. }
            | Self::Click { target, .. }
            | Self::Move { target, .. } => target.as_deref(),
        }
    }

    pub fn position(&self) -> (u16, u16) {
        match self {
            Self::Down { x, y, .. }
            | Self::Up { x, y, .. }
            | Self::Click { x, y, .. }
            | Self::Move { x, y, .. } => (*x, *y),
        }
    }

    /// Convert a crossterm mouse event, resolving the target against the
    /// last rendered tree. Scroll events have no pointer counterpart.
    pub fn from_crossterm(
        mouse: &crossterm::event::MouseEvent,
        layout: &LayoutResult,
        root: &Element,
    ) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let (x, y) = (mouse.column, mouse.row);
        let target = hit_test_any(layout, root, x, y);

        match mouse.kind {
            MouseEventKind::Down(btn) => Some(Self::Down {
                target,
                x,
                y,
                button: btn.into(),
            }),
            MouseEventKind::Up(btn) => Some(Self::Up {
                target,
                x,
                y,
                button: btn.into(),
            }),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(Self::Move { target, x, y }),
            _ => None,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Synthesizes `Click` events from `Down`/`Up` pairs.
///
/// A click fires when a button is released over the same element it was
/// pressed on, mirroring how browsers derive `click` from `mousedown` and
/// `mouseup`.
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed: Option<(Option<String>, MouseButton)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw event; returns the synthesized click, if any.
    pub fn track(&mut self, event: &PointerEvent) -> Option<PointerEvent> {
        match event {
            PointerEvent::Down { target, button, .. } => {
                self.pressed = Some((target.clone(), *button));
                None
            }
            PointerEvent::Up {
                target,
                x,
                y,
                button,
            } => {
                let (pressed_target, pressed_button) = self.pressed.take()?;
                if pressed_button != *button || pressed_target != *target {
                    return None;
                }
                Some(PointerEvent::Click {
                    target: target.clone(),
                    x: *x,
                    y: *y,
                    button: *button,
                })
            }
            PointerEvent::Click { .. } | PointerEvent::Move { .. } => None,
        }
    }
}
