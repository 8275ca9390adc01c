use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        models::{
            Diagnosis,
            FieldKind,
            FieldValue,
        },
        FormState,
    },
    gui::theme::Theme,
};

// A simple ui action queue so the render pass never needs mutable access
// to the form state it is drawing.
#[derive(Debug, Clone)]
pub enum FormAction {
    SetValue { key: String, value: String },
    CaptureVoice { key: String },
    SpeakTooltip { key: String },
    Submit,
}

/// One diagnosis form: a row per field (value widget, mic trigger,
/// tooltip audio trigger) plus the submit action and the last result.
pub struct FormPage;

impl FormPage {
    pub fn show(
        ctx: &egui::Context,
        form: &FormState,
        listening: bool,
        can_submit: bool,
        last_result: Option<&Diagnosis>,
        theme: &Theme,
    ) -> Vec<FormAction> {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(theme.heading(form.category().title()));
            ui.label("Enter the following details:");
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::remainder().at_least(260.0))
                    .column(Column::auto().at_least(110.0))
                    .column(Column::auto())
                    .column(Column::auto())
                    .body(|mut body| {
                        for field in form.fields() {
                            body.row(26.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(field.spec.label);
                                });
                                row.col(|ui| {
                                    Self::value_widget(ui, form, field, &mut actions);
                                });
                                row.col(|ui| {
                                    let mic =
                                        ui.add_enabled(!listening, egui::Button::new("🎤"));
                                    if mic.on_hover_text("Speak the value").clicked() {
                                        actions.push(FormAction::CaptureVoice {
                                            key: field.spec.key.to_string(),
                                        });
                                    }
                                });
                                row.col(|ui| {
                                    if ui.button("ℹ").on_hover_text(field.spec.tooltip).clicked()
                                    {
                                        actions.push(FormAction::SpeakTooltip {
                                            key: field.spec.key.to_string(),
                                        });
                                    }
                                });
                            });
                        }
                    });

                ui.add_space(12.0);

                let submit =
                    ui.add_enabled(can_submit, egui::Button::new(form.category().submit_label()));
                if submit.on_hover_text("Classify the record").clicked() {
                    actions.push(FormAction::Submit);
                }

                if let Some(diagnosis) = last_result {
                    ui.add_space(10.0);
                    let color = if diagnosis.is_positive { theme.red() } else { theme.green() };
                    ui.label(egui::RichText::new(&diagnosis.message).color(color).strong());
                }
            });
        });

        actions
    }

    fn value_widget(
        ui: &mut egui::Ui,
        form: &FormState,
        field: &FieldValue,
        actions: &mut Vec<FormAction>,
    ) {
        match field.spec.kind {
            FieldKind::Number => {
                // Lenient display: unparsable storage shows as 0.0; the
                // raw string stays put until the user edits the widget.
                let mut display = form.display_number(field.spec.key);
                let response =
                    ui.add(egui::DragValue::new(&mut display).speed(1.0).max_decimals(6));
                if response.changed() {
                    actions.push(FormAction::SetValue {
                        key: field.spec.key.to_string(),
                        value: display.to_string(),
                    });
                }
            }
            FieldKind::Text => {
                let mut text = field.value.clone();
                if ui.text_edit_singleline(&mut text).changed() {
                    actions.push(FormAction::SetValue {
                        key: field.spec.key.to_string(),
                        value: text,
                    });
                }
            }
        }
    }
}
