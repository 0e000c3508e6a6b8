#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}
