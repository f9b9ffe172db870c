//! Native message boxes

use crate::site::prompt::Prompt;

const TITLE: &str = "SiteDesk";

/// Prompt backed by the platform's message dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm(&mut self, message: &str) -> bool {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(TITLE)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
            == rfd::MessageDialogResult::Yes
    }

    fn notify(&mut self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(TITLE)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
