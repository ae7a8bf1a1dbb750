//! Toggle switch interaction state.
//!
//! Transitions are plain methods on [`SwitchState`]. They never touch the
//! DOM: anything the view has to do afterwards (report a switch, move focus,
//! suppress the key's default action) comes back in a [`Transition`].

use super::option::{OptionSlot, OptionValue, SwitchOptions};

/// Keys that flip the switch while it has focus
pub const TOGGLE_KEYS: [&str; 3] = ["Enter", " ", "Spacebar"];

/// Whether `key` (a DOM `KeyboardEvent.key` value) toggles the switch
pub fn is_toggle_key(key: &str) -> bool {
    TOGGLE_KEYS.contains(&key)
}

/// Effects a transition asks the view to carry out
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Value to report through the change callback
    pub switched: Option<OptionValue>,
    /// Button that should receive input focus
    pub focus: Option<OptionSlot>,
    /// Whether the triggering event's default action should be suppressed
    pub prevent_default: bool,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }

    /// Carry out the effects: report the switch first, then move focus.
    ///
    /// Returns whether the triggering event's default action should be
    /// suppressed.
    pub fn dispatch(
        self,
        on_switch: impl FnOnce(OptionValue),
        on_focus: impl FnOnce(OptionSlot),
    ) -> bool {
        if let Some(value) = self.switched {
            on_switch(value);
        }
        if let Some(slot) = self.focus {
            on_focus(slot);
        }
        self.prevent_default
    }
}

/// Local state of one toggle switch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchState {
    active: Option<OptionValue>,
    hovered: Option<OptionSlot>,
}

impl SwitchState {
    /// State for a freshly mounted switch, seeded from the external value
    pub fn new(external: Option<OptionValue>) -> Self {
        Self {
            active: external,
            hovered: None,
        }
    }

    pub fn active(&self) -> Option<&OptionValue> {
        self.active.as_ref()
    }

    pub fn hovered(&self) -> Option<OptionSlot> {
        self.hovered
    }

    /// Slot of the active option; the first match wins
    pub fn active_slot(&self, options: &SwitchOptions) -> Option<OptionSlot> {
        self.active.as_ref().and_then(|value| options.slot_of(value))
    }

    /// Pointer activation of `slot`
    pub fn select(&mut self, options: &SwitchOptions, slot: OptionSlot) -> Transition {
        let value = options.get(slot).value.clone();
        tracing::debug!(?slot, %value, "switch option selected");
        self.active = Some(value.clone());

        Transition {
            switched: Some(value),
            focus: None,
            prevent_default: false,
        }
    }

    /// Keyboard activation while the switch has focus.
    ///
    /// Toggle keys move to the first option that is not active and ask for
    /// focus on its button. Other keys are left alone.
    pub fn toggle_by_key(&mut self, options: &SwitchOptions, key: &str) -> Transition {
        if !is_toggle_key(key) {
            return Transition::none();
        }

        let target = options
            .iter()
            .find(|(_, option)| Some(&option.value) != self.active.as_ref())
            .map(|(slot, _)| slot);

        let Some(slot) = target else {
            tracing::warn!("no inactive option to switch to, options share one value");
            return Transition {
                prevent_default: true,
                ..Transition::none()
            };
        };

        let mut transition = self.select(options, slot);
        transition.focus = options.slot_of(&options.get(slot).value);
        transition.prevent_default = true;
        transition
    }

    /// Reconcile with the externally supplied value.
    ///
    /// A supplied value always wins over local state; `None` leaves local
    /// state alone. Runs before every render and every event, so a pinned
    /// value pulls the switch back after a click. Returns whether the active
    /// option changed.
    pub fn sync_external(&mut self, external: Option<&OptionValue>) -> bool {
        let Some(value) = external else {
            return false;
        };

        if self.active.as_ref() == Some(value) {
            return false;
        }

        tracing::debug!(%value, "switch synced to external value");
        self.active = Some(value.clone());
        true
    }

    /// Copy of this state with the external value applied
    pub fn reconciled(&self, external: Option<&OptionValue>) -> Self {
        let mut state = self.clone();
        state.sync_external(external);
        state
    }

    /// Pointer entered the button in `slot`
    pub fn hover(&mut self, slot: OptionSlot) {
        self.hovered = Some(slot);
    }

    /// Pointer left the whole switch
    pub fn leave(&mut self) {
        self.hovered = None;
    }
}
