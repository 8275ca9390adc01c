use eframe::egui::{
    self,
    containers,
};

use crate::gui::settings::{
    SettingsData,
    VoiceSettingsModal,
};

pub enum TopBarAction {
    BackToHome,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        on_form_page: bool,
        models_loaded: bool,
        listening: bool,
        settings_modal: &mut VoiceSettingsModal,
        current_settings: &SettingsData,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                if on_form_page && ui.button("← Back to Home").clicked() {
                    action = Some(TopBarAction::BackToHome);
                }

                ui.menu_button("Settings", |ui| {
                    if ui.button("Voice Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, models_loaded, listening);
                });
            });
        });

        action
    }

    fn show_status_indicators(ui: &mut egui::Ui, models_loaded: bool, listening: bool) {
        let models_color = if models_loaded {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let models_tooltip =
            if models_loaded { "Classifier models loaded" } else { "Classifier models not loaded" };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Models").on_hover_text(models_tooltip);
            ui.small(egui::RichText::new("●").color(models_color)).on_hover_text(models_tooltip);
        });

        if listening {
            ui.add_space(3.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                ui.small("Listening");
                ui.small(egui::RichText::new("●").color(egui::Color32::from_rgb(255, 161, 90)));
            });
        }
    }
}
