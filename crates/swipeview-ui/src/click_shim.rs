//! Click listeners hidden from the host's own dispatch.
//!
//! The host never sees the listeners: it only learns whether the widget is
//! clickable. Listeners run when the gesture state machine performs a click,
//! with the host's native dispatch invoked around them for side effects.

use crate::ClickKind;

pub type ClickListener = Box<dyn FnMut()>;
/// Returns whether the long click was consumed.
pub type LongClickListener = Box<dyn FnMut() -> bool>;

#[derive(Default)]
pub struct ClickShim {
    on_click: Option<ClickListener>,
    on_long_click: Option<LongClickListener>,
}

impl ClickShim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_click_listener(&mut self, listener: Option<ClickListener>) {
        self.on_click = listener;
    }

    pub fn set_on_long_click_listener(&mut self, listener: Option<LongClickListener>) {
        self.on_long_click = listener;
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn is_long_clickable(&self) -> bool {
        self.on_long_click.is_some()
    }

    /// Performs a click of `kind`.
    ///
    /// `native` is the host's own dispatch. Without a listener the result is
    /// whatever the host reports; with one, the host is notified first and the
    /// listener decides the result.
    pub fn perform(&mut self, kind: ClickKind, native: impl FnOnce(ClickKind) -> bool) -> bool {
        match kind {
            ClickKind::Click => match self.on_click.as_mut() {
                Some(listener) => {
                    native(kind);
                    listener();
                    true
                }
                None => native(kind),
            },
            ClickKind::LongClick => match self.on_long_click.as_mut() {
                Some(listener) => {
                    native(kind);
                    listener()
                }
                None => native(kind),
            },
        }
    }
}

impl std::fmt::Debug for ClickShim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickShim")
            .field("clickable", &self.is_clickable())
            .field("long_clickable", &self.is_long_clickable())
            .finish()
    }
}
