use crate::config::Config;
use crate::dictation::DictationState;
use egui::{RichText, Ui};

/// Main status panel: one action button plus the transcription / error /
/// usage-hint sections the original command rendered as markdown.
#[derive(Default)]
pub struct DictationScreen {
    pub transcription: Option<String>,
    pub error: Option<String>,
}

impl DictationScreen {
    pub fn ui(&mut self, ui: &mut Ui, state: DictationState) -> DictationAction {
        let mut action = DictationAction::None;

        ui.heading("🎤 Talk to Me");
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            match state {
                DictationState::Idle => {
                    if ui
                        .button(RichText::new("🎙 Start Recording").size(18.0))
                        .clicked()
                    {
                        action = DictationAction::StartDictation;
                    }
                }
                DictationState::Recording => {
                    ui.add_enabled(
                        false,
                        egui::Button::new(RichText::new("🔴 Recording...").size(18.0)),
                    );
                    ui.label(
                        RichText::new("Speak now")
                            .size(16.0)
                            .color(egui::Color32::RED),
                    );
                }
                DictationState::Processing => {
                    ui.add_enabled(
                        false,
                        egui::Button::new(RichText::new("🎙 Start Recording").size(18.0)),
                    );
                    ui.spinner();
                    ui.label(RichText::new("Converting speech to text...").size(14.0));
                }
            }
        });

        ui.add_space(20.0);

        if let Some(error) = &self.error {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Error").strong().color(egui::Color32::RED));
                    ui.add_space(5.0);
                    ui.colored_label(egui::Color32::RED, error);
                });
            });
            ui.add_space(10.0);
        }

        if let Some(text) = &self.transcription {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Transcription").strong());
                    ui.add_space(5.0);

                    egui::ScrollArea::vertical()
                        .max_height(300.0)
                        .show(ui, |ui| {
                            ui.label(text);
                        });

                    ui.add_space(5.0);

                    if ui.button("📋 Copy to Clipboard").clicked() {
                        ui.output_mut(|o| o.copied_text = text.clone());
                    }
                });
            });
        } else if self.error.is_none() {
            ui.label("Click 'Start Recording' and speak into your microphone.");
            ui.label("Your speech will be converted to text and pasted into the active input field.");
            ui.add_space(5.0);
            ui.label(
                RichText::new("Note: Make sure you have set your API key in Settings.").weak(),
            );
        }

        action
    }
}

pub enum DictationAction {
    None,
    StartDictation,
}

pub struct SettingsScreen {
    pub api_key_input: String,
    pub model_input: String,
    pub recorder_command: String,
    pub max_duration_secs: u64,
    pub paste_on_success: bool,
}

impl SettingsScreen {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key_input: config.whisper.api_key.clone(),
            model_input: config.whisper.model.clone(),
            recorder_command: config.recorder.command.clone(),
            max_duration_secs: config.recorder.max_duration_secs,
            paste_on_success: config.ui.paste_on_success,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) -> SettingsAction {
        let mut action = SettingsAction::None;

        ui.heading("⚙️ Settings");
        ui.add_space(20.0);

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Transcription API").strong());
                ui.add_space(5.0);

                ui.label("API Key:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.api_key_input)
                        .password(true)
                        .hint_text("sk-..."),
                );
                if response.changed() {
                    action = SettingsAction::SaveConfig;
                }

                ui.add_space(5.0);

                ui.label("Model:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.model_input).hint_text("whisper-1"),
                );
                if response.changed() {
                    action = SettingsAction::SaveConfig;
                }
            });
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Recorder").strong());
                ui.add_space(5.0);

                ui.label("Recorder command:");
                let response =
                    ui.add(egui::TextEdit::singleline(&mut self.recorder_command).hint_text("rec"));
                if response.changed() {
                    action = SettingsAction::SaveConfig;
                }

                ui.add_space(5.0);

                ui.label("Maximum recording length (seconds):");
                let slider = ui.add(egui::Slider::new(&mut self.max_duration_secs, 1..=30));
                if slider.changed() {
                    action = SettingsAction::SaveConfig;
                }
            });
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Output").strong());
                ui.add_space(5.0);

                let checkbox = ui.checkbox(
                    &mut self.paste_on_success,
                    "Paste into the active input field",
                );
                if checkbox.changed() {
                    action = SettingsAction::SaveConfig;
                }

                ui.add_space(5.0);
                ui.label(
                    RichText::new(
                        "When disabled, the transcription is only copied to the clipboard.",
                    )
                    .weak(),
                );
            });
        });

        action
    }

    pub fn to_config(&self, config: &mut Config) {
        config.whisper.api_key = self.api_key_input.clone();
        config.whisper.model = self.model_input.clone();
        config.recorder.command = self.recorder_command.clone();
        config.recorder.max_duration_secs = self.max_duration_secs;
        config.ui.paste_on_success = self.paste_on_success;
    }
}

pub enum SettingsAction {
    None,
    SaveConfig,
}
