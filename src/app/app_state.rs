use crate::alert::AlertState;
use crate::config::{Config, InputsConfig, KeyEventMode};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::tooltip::{LookupSettings, TooltipController};

pub struct App {
    pub inputs: Vec<InputState>,
    /// Index into `inputs`; always valid
    pub focused: usize,
    pub tooltip: TooltipController,
    pub alert: AlertState,
    pub notification: NotificationState,
    pub key_events: KeyEventMode,
    pub should_quit: bool,
    pub layout_regions: LayoutRegions,
}

impl App {
    /// Build the app from a config
    ///
    /// The binary rejects an empty input list in `config::validate`; library
    /// callers that skip validation get the default input so `focused` stays
    /// a valid index.
    pub fn new(config: &Config) -> Self {
        let ids = if config.inputs.ids.is_empty() {
            InputsConfig::default().ids
        } else {
            config.inputs.ids.clone()
        };

        Self {
            inputs: ids.iter().map(|uid| InputState::new(uid)).collect(),
            focused: 0,
            tooltip: TooltipController::new(LookupSettings::from_config(config)),
            alert: AlertState::new(),
            notification: NotificationState::new(),
            key_events: config.tooltip.key_events,
            should_quit: false,
            layout_regions: LayoutRegions::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_input(&self) -> &InputState {
        &self.inputs[self.focused]
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        &mut self.inputs[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Focus the first input with this uid; unknown uids leave focus alone
    pub fn focus_uid(&mut self, uid: &str) {
        if let Some(index) = self.inputs.iter().position(|input| input.uid == uid) {
            self.focused = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{app_with_inputs, test_app};

    #[test]
    fn test_app_initialization() {
        let app = test_app();
        assert_eq!(app.inputs.len(), 1);
        assert_eq!(app.focused_input().uid, "1");
        assert!(!app.should_quit());
        assert!(!app.tooltip.state.is_visible());
        assert!(!app.tooltip.help.visible);
        assert!(!app.alert.is_visible());
        assert_eq!(app.key_events, KeyEventMode::Keyup);
    }

    #[test]
    fn test_inputs_from_config() {
        let app = app_with_inputs(&["a", "b", "c"]);
        let uids: Vec<&str> = app.inputs.iter().map(|i| i.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input_list_falls_back_to_default() {
        let mut config = Config::default();
        config.inputs.ids.clear();
        let app = App::new(&config);
        assert_eq!(app.inputs.len(), 1);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = app_with_inputs(&["a", "b", "c"]);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focused, 2);
        app.focus_next();
        assert_eq!(app.focused, 0);
        app.focus_prev();
        assert_eq!(app.focused, 2);
    }

    #[test]
    fn test_focus_uid() {
        let mut app = app_with_inputs(&["a", "b"]);
        app.focus_uid("b");
        assert_eq!(app.focused, 1);
        app.focus_uid("missing");
        assert_eq!(app.focused, 1);
    }
}
