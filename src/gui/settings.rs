use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub transcriber_endpoint: String,
    pub synthesizer_endpoint: String,
    pub listen_timeout_secs: f32,
    pub calibration_secs: f32,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            transcriber_endpoint: "http://127.0.0.1:5051/listen".to_string(),
            synthesizer_endpoint: "http://127.0.0.1:5052/synthesize".to_string(),
            listen_timeout_secs: 5.0,
            calibration_secs: 0.5,
            dark_mode: true,
        }
    }
}

/// Endpoint and listen-window settings. Returns the edited settings
/// when the user saves.
pub struct VoiceSettingsModal {
    open: bool,
    draft: SettingsData,
}

impl VoiceSettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.draft = current;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("voice_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Voice Settings");
            ui.add_space(10.0);

            egui::Grid::new("voice_settings_grid").num_columns(2).spacing([10.0, 8.0]).show(
                ui,
                |ui| {
                    ui.label("Transcription endpoint");
                    ui.text_edit_singleline(&mut self.draft.transcriber_endpoint);
                    ui.end_row();

                    ui.label("Synthesis endpoint");
                    ui.text_edit_singleline(&mut self.draft.synthesizer_endpoint);
                    ui.end_row();

                    ui.label("Listen timeout (s)");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.listen_timeout_secs)
                            .range(1.0..=30.0)
                            .speed(0.5),
                    );
                    ui.end_row();

                    ui.label("Ambient calibration (s)");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.calibration_secs)
                            .range(0.0..=5.0)
                            .speed(0.1),
                    );
                    ui.end_row();
                },
            );

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        saved = Some(self.draft.clone());
                        ui.close();
                    }
                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for VoiceSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
