use crate::gui::{
    error_modal::ErrorModal,
    settings::VoiceSettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub voice_settings: VoiceSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { error: ErrorModal::new(), voice_settings: VoiceSettingsModal::new() }
    }
}
