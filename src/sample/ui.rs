//! Calculator user interface and its test double

use crate::common::{Error, Result};

/// What the calculator needs from its user interface
pub trait CalcUserInterface {
    fn set_status_bar(&mut self, msg: &str);
    fn set_result_contents(&mut self, msg: &str);
    fn set_title_bar(&mut self, msg: &str);
    fn text_box_contents(&self) -> String;
    fn close(&mut self) -> Result<()>;
}

/// In-memory user interface used by the sample steps
///
/// Widgets are plain fields so steps can type into the text box and read
/// the bars back. `close` is a mock: every call must be announced with
/// [`FakeCalcUi::expect_close`] first.
#[derive(Debug, Default)]
pub struct FakeCalcUi {
    pub title_bar: String,
    pub result_contents: String,
    pub status_bar: String,
    pub text_box_contents: String,
    expected_closes: u32,
}

impl FakeCalcUi {
    /// Allow `count` more calls to `close`
    pub fn expect_close(&mut self, count: u32) {
        self.expected_closes += count;
    }

    /// Every announced `close` call happened
    pub fn verify_expected_close(&self) -> bool {
        self.expected_closes == 0
    }
}

impl CalcUserInterface for FakeCalcUi {
    fn set_status_bar(&mut self, msg: &str) {
        self.status_bar = msg.to_string();
    }

    fn set_result_contents(&mut self, msg: &str) {
        self.result_contents = msg.to_string();
    }

    fn set_title_bar(&mut self, msg: &str) {
        self.title_bar = msg.to_string();
    }

    fn text_box_contents(&self) -> String {
        self.text_box_contents.clone()
    }

    fn close(&mut self) -> Result<()> {
        if self.expected_closes == 0 {
            return Err(Error::action("unexpected call to close()"));
        }
        self.expected_closes -= 1;
        Ok(())
    }
}
