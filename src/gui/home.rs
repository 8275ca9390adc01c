use eframe::egui;

use crate::{
    core::models::Category,
    gui::theme::Theme,
};

/// Category selector shown when no form is active.
pub struct HomePage {
    selected: Category,
}

impl HomePage {
    pub fn new() -> Self {
        Self { selected: Category::Diabetes }
    }

    /// Returns the chosen category when the user starts a diagnosis.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<Category> {
        let mut started = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(theme.heading("Welcome to MediVoice"));
                ui.add_space(10.0);
                ui.label(
                    "This system helps predict various diseases using machine learning models. \
                     Select a disease from the dropdown menu below to begin diagnosis.",
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(30.0);

                egui::ComboBox::from_label("Select a Disease to Predict")
                    .selected_text(self.selected.title())
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            ui.selectable_value(&mut self.selected, category, category.title());
                        }
                    });

                ui.add_space(20.0);

                if ui.button("Start Diagnosis").clicked() {
                    started = Some(self.selected);
                }
            });
        });

        started
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}
