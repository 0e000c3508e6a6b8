use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::alert::render_alert;
use crate::input::input_render::render_input;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [inputs_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        let input_rects =
            Layout::vertical(self.inputs.iter().map(|_| Constraint::Fill(1))).split(inputs_area);

        for (index, (input, rect)) in self.inputs.iter_mut().zip(input_rects.iter()).enumerate() {
            render_input(input, index == self.focused, frame, *rect);
            self.layout_regions.inputs.push(*rect);
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        if let Some(areas) = crate::tooltip::tooltip_render::render_popup(&self.tooltip.state, frame)
        {
            self.layout_regions.tooltip = Some(areas.popup);
            self.layout_regions.tooltip_close = areas.close;
        }

        if self.tooltip.help.visible {
            self.layout_regions.help_popup = crate::help::help_popup_render::render_popup(frame);
        }

        self.layout_regions.alert = render_alert(frame, &self.alert);

        render_notification(frame, &mut self.notification);
    }
}
