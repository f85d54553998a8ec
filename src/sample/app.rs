//! A tiny calculator: the application under test in the sample

use super::ui::CalcUserInterface;
use crate::common::Result;

/// Buttons the user can press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    Subtract,
}

/// Running total driven through a user interface
pub struct CalcApplication<U> {
    ui: U,
    current: i64,
}

impl<U: CalcUserInterface> CalcApplication<U> {
    pub fn new(ui: U) -> Self {
        Self { ui, current: 0 }
    }

    pub fn start_up(&mut self) {
        self.ui.set_title_bar("My Calculator");
        self.ui.set_status_bar("Ready");
        self.ui.set_result_contents("0");
    }

    pub fn exit(&mut self) -> Result<()> {
        self.ui.close()
    }

    /// Apply the text box value to the total
    ///
    /// Anything but a non-empty run of digits sets the status bar to
    /// "Error" and leaves the total alone.
    pub fn press(&mut self, button: Button) {
        let Some(value) = self.parse_text_box() else {
            self.ui.set_status_bar("Error");
            return;
        };

        self.current = match button {
            Button::Add => self.current.saturating_add(value),
            Button::Subtract => self.current.saturating_sub(value),
        };
        self.ui.set_result_contents(&self.current.to_string());
        self.ui.set_status_bar("Ready");
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    fn parse_text_box(&self) -> Option<i64> {
        let text = self.ui.text_box_contents();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        text.parse().ok()
    }
}
