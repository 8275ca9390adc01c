mod modals;

use std::{
    sync::Arc,
    time::Duration,
};

use eframe::egui;
use modals::Modals;

use super::{
    form_page::{
        FormAction,
        FormPage,
    },
    home::HomePage,
    message_overlay::MessageOverlay,
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    classifier::ClassifierSet,
    core::{
        errors::VoiceError,
        models::{
            Category,
            Diagnosis,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        FormState,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    voice::{
        CaptureGate,
        HttpSynthesizer,
        HttpTranscriber,
        Synthesizer,
        Transcriber,
    },
};

pub struct MediVoiceApp {
    // Active workflow: None = home selector, Some = one category's form.
    form: Option<FormState>,
    last_result: Option<Diagnosis>,

    // Configuration
    settings_data: SettingsData,

    // UI State
    home: HomePage,
    theme: Theme,
    message_overlay: MessageOverlay,
    modals: Modals,

    // External collaborators
    classifiers: Option<Arc<ClassifierSet>>,
    transcriber: Arc<dyn Transcriber>,
    synthesizer: Arc<dyn Synthesizer>,
    gate: CaptureGate,

    task_manager: TaskManager,
}

impl MediVoiceApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let task_manager = TaskManager::new();

        task_manager.load_classifiers();

        let settings_data = load_json_or_default::<SettingsData>("settings.json");

        let transcriber = Arc::new(HttpTranscriber::new(settings_data.transcriber_endpoint.clone()));
        let synthesizer = Arc::new(HttpSynthesizer::new(settings_data.synthesizer_endpoint.clone()));

        let app = Self {
            form: None,
            last_result: None,

            settings_data,

            home: HomePage::new(),
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),

            classifiers: None,
            transcriber,
            synthesizer,
            gate: CaptureGate::new(),

            task_manager,
        };

        set_theme(&cc.egui_ctx, app.theme.clone());

        cc.egui_ctx.set_theme(if app.settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        app
    }

    fn listen_timeout(&self) -> Duration {
        Duration::from_secs_f32(self.settings_data.listen_timeout_secs)
    }

    fn calibration(&self) -> Duration {
        Duration::from_secs_f32(self.settings_data.calibration_secs)
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        self.settings_data = settings;
        self.transcriber =
            Arc::new(HttpTranscriber::new(self.settings_data.transcriber_endpoint.clone()));
        self.synthesizer =
            Arc::new(HttpSynthesizer::new(self.settings_data.synthesizer_endpoint.clone()));
        self.save_settings();
    }

    fn start_diagnosis(&mut self, category: Category) {
        self.form = Some(FormState::new(category));
        self.last_result = None;
    }

    fn handle_task_result(&mut self, result: TaskResult, ctx: &egui::Context) {
        match result {
            TaskResult::ClassifiersLoaded(result) => match result {
                Ok(set) => {
                    self.classifiers = Some(set);
                    self.message_overlay.clear_message();
                }
                Err(e) => {
                    self.message_overlay.clear_message();
                    self.modals.error.show_error(
                        "Model Loading Error",
                        "Unable to load the classifier models. Predictions are disabled.",
                        Some(e),
                    );
                }
            },

            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }

            TaskResult::VoiceCapture { key, result } => {
                self.message_overlay.clear_message();
                match result {
                    Ok(transcript) => {
                        // Stored verbatim; numeric parsing only happens at
                        // display and submission time.
                        if let Some(form) = &mut self.form {
                            form.set_value(&key, transcript);
                        }
                    }
                    Err(
                        e @ (VoiceError::Timeout | VoiceError::Unrecognized),
                    ) => {
                        self.modals.error.show_warning("Voice Input", e.to_string());
                    }
                    Err(e) => {
                        self.modals.error.show_error("Voice Input", e.to_string(), None::<String>);
                    }
                }
                ctx.request_repaint();
            }

            TaskResult::SpeechFinished(result) => {
                if let Err(e) = result {
                    // Best effort only; never interrupts the workflow.
                    eprintln!("Speech playback failed: {}", e);
                }
            }
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::SetValue { key, value } => {
                if let Some(form) = &mut self.form {
                    form.set_value(&key, value);
                }
            }

            FormAction::CaptureVoice { key } => {
                if self.gate.is_listening() {
                    return;
                }

                self.message_overlay.set_message("Listening... Speak now".to_string());
                self.task_manager.capture_voice(
                    key,
                    self.gate.clone(),
                    Arc::clone(&self.transcriber),
                    self.listen_timeout(),
                    self.calibration(),
                );
            }

            FormAction::SpeakTooltip { key } => {
                if let Some(form) = &self.form {
                    let tooltip = form
                        .fields()
                        .iter()
                        .find(|f| f.spec.key == key)
                        .map(|f| f.spec.tooltip.to_string());

                    if let Some(tooltip) = tooltip {
                        self.task_manager.speak(tooltip, Arc::clone(&self.synthesizer));
                    }
                }
            }

            FormAction::Submit => self.submit_record(),
        }
    }

    fn submit_record(&mut self) {
        let form = match &self.form {
            Some(form) => form,
            None => return,
        };

        let classifier = match self.classifiers.as_ref().and_then(|set| set.get(form.category())) {
            Some(classifier) => classifier,
            None => {
                self.modals.error.show_error(
                    "Models Not Loaded",
                    "The classifier models are still loading or failed to load.",
                    None::<String>,
                );
                return;
            }
        };

        match crate::core::submission::submit(form, classifier) {
            Ok(diagnosis) => {
                // Result is always shown and spoken together.
                self.task_manager
                    .speak(diagnosis.message.clone(), Arc::clone(&self.synthesizer));
                self.last_result = Some(diagnosis);
            }
            Err(e) => {
                self.last_result = None;
                self.modals.error.show_error("Prediction", e.to_string(), None::<String>);
            }
        }
    }
}

impl eframe::App for MediVoiceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result, ctx);
        }

        let listening = self.gate.is_listening();

        if let Some(action) = TopBar::show(
            ctx,
            self.form.is_some(),
            self.classifiers.is_some(),
            listening,
            &mut self.modals.voice_settings,
            &self.settings_data,
        ) {
            match action {
                TopBarAction::BackToHome => {
                    self.form = None;
                    self.last_result = None;
                }
            }
        }

        match &self.form {
            None => {
                if let Some(category) = self.home.show(ctx, &self.theme) {
                    self.start_diagnosis(category);
                }
            }
            Some(form) => {
                let actions = FormPage::show(
                    ctx,
                    form,
                    listening,
                    self.classifiers.is_some(),
                    self.last_result.as_ref(),
                    &self.theme,
                );

                for action in actions {
                    self.handle_form_action(action);
                }
            }
        }

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);

        if let Some(settings) = self.modals.voice_settings.show(ctx) {
            self.apply_settings(settings);
        }

        // Keep polling while a capture or load is pending off-thread.
        if self.message_overlay.active {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
