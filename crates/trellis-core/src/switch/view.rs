//! Render model of a toggle switch.

use super::option::{OptionSlot, SwitchOptions};
use super::state::SwitchState;
use crate::class_list::ClassList;

pub const SWITCH_CLASS: &str = "SliderSwitch";
pub const SWITCH_BORDER_CLASS: &str = "SliderSwitch__border";
pub const SWITCH_SLIDER_CLASS: &str = "SliderSwitch__slider";
pub const SWITCH_BUTTON_CLASS: &str = "SliderSwitch__button";

/// One option button as rendered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub slot: OptionSlot,
    pub label: String,
    pub active: bool,
    pub hovered: bool,
}

impl ButtonView {
    pub fn classes(&self) -> ClassList {
        button_classes(self.active, self.hovered)
    }
}

/// Classes of an option button in the given state
pub fn button_classes(active: bool, hovered: bool) -> ClassList {
    ClassList::new()
        .add(SWITCH_BUTTON_CLASS)
        .add_if(active, format!("{}--active", SWITCH_BUTTON_CLASS))
        .add_if(hovered, format!("{}--hover", SWITCH_BUTTON_CLASS))
}

/// Everything a toggle switch renders for a given state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchView {
    pub classes: ClassList,
    /// Neutral border, shown only while no option is active
    pub show_border: bool,
    pub slider_classes: ClassList,
    /// Value mirrored into the hidden form field
    pub hidden_value: String,
    pub buttons: [ButtonView; 2],
}

impl SwitchView {
    pub fn build(options: &SwitchOptions, state: &SwitchState, class: Option<&str>) -> Self {
        let active = state.active_slot(options);
        let button = |slot: OptionSlot| ButtonView {
            slot,
            label: options.get(slot).name.clone(),
            active: active == Some(slot),
            hovered: state.hovered() == Some(slot),
        };

        Self {
            classes: ClassList::new().add(SWITCH_CLASS).add_opt(class),
            show_border: active.is_none(),
            slider_classes: ClassList::new()
                .add(SWITCH_SLIDER_CLASS)
                .add_if(
                    active == Some(OptionSlot::First),
                    format!("{}--firstActive", SWITCH_CLASS),
                )
                .add_if(
                    active == Some(OptionSlot::Second),
                    format!("{}--secondActive", SWITCH_CLASS),
                ),
            hidden_value: state.active().map(ToString::to_string).unwrap_or_default(),
            buttons: [button(OptionSlot::First), button(OptionSlot::Second)],
        }
    }

    pub fn active_count(&self) -> usize {
        self.buttons.iter().filter(|b| b.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::SwitchOption;

    fn options() -> SwitchOptions {
        SwitchOptions::new(SwitchOption::new("Month", 30), SwitchOption::new("Year", 365)).unwrap()
    }

    #[test]
    fn unselected_pair_shows_border() {
        let view = SwitchView::build(&options(), &SwitchState::default(), None);
        assert!(view.show_border);
        assert_eq!(view.slider_classes.to_string(), "SliderSwitch__slider");
        assert_eq!(view.hidden_value, "");
        assert_eq!(view.active_count(), 0);
    }

    #[test]
    fn active_second_option_moves_slider() {
        let view = SwitchView::build(&options(), &SwitchState::new(Some(365.into())), Some("plan"));
        assert!(!view.show_border);
        assert_eq!(view.classes.to_string(), "SliderSwitch plan");
        assert_eq!(
            view.slider_classes.to_string(),
            "SliderSwitch__slider SliderSwitch--secondActive"
        );
        assert_eq!(view.hidden_value, "365");
        assert!(view.buttons[1].active);
        assert_eq!(view.buttons[1].label, "Year");
    }

    #[test]
    fn hovered_button_classes() {
        let mut state = SwitchState::new(Some(30.into()));
        state.hover(OptionSlot::Second);
        let view = SwitchView::build(&options(), &state, None);
        assert_eq!(
            view.buttons[0].classes().to_string(),
            "SliderSwitch__button SliderSwitch__button--active"
        );
        assert_eq!(
            view.buttons[1].classes().to_string(),
            "SliderSwitch__button SliderSwitch__button--hover"
        );
    }

    #[test]
    fn placeholder_pair_marks_only_first() {
        let view = SwitchView::build(
            &SwitchOptions::default(),
            &SwitchState::new(Some("".into())),
            None,
        );
        assert_eq!(view.active_count(), 1);
        assert!(view.buttons[0].active);
    }
}
