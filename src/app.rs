use crate::config::Config;
use crate::dictation::{self, DictationEvent, DictationState};
use crate::notifications::ToastManager;
use crate::ui::{DictationAction, DictationScreen, SettingsAction, SettingsScreen};
use std::sync::mpsc;

pub struct App {
    current_screen: Screen,
    state: DictationState,

    dictation_screen: DictationScreen,
    settings_screen: SettingsScreen,

    config: Config,

    event_rx: mpsc::Receiver<DictationEvent>,
    event_tx: mpsc::Sender<DictationEvent>,

    toasts: ToastManager,
    activity_log: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Dictation,
    Settings,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext) -> Self {
        let (tx, rx) = mpsc::channel();

        let config = Config::load().unwrap_or_default();
        let settings_screen = SettingsScreen::from_config(&config);

        Self {
            current_screen: Screen::Dictation,
            state: DictationState::Idle,
            dictation_screen: DictationScreen::default(),
            settings_screen,
            config,
            event_rx: rx,
            event_tx: tx,
            toasts: ToastManager::new(),
            activity_log: Vec::new(),
        }
    }

    fn start_dictation(&mut self) {
        if self.state != DictationState::Idle {
            return;
        }

        // Re-read the config so a credential edited elsewhere is picked up;
        // the snapshot is passed explicitly into the dictation task.
        match Config::load() {
            Ok(config) => self.config = config,
            Err(e) => {
                self.add_log(format!("Config reload failed: {}", e));
            }
        }

        self.dictation_screen.error = None;
        self.state = DictationState::Recording;
        self.add_log("Dictation started".to_string());

        let config = self.config.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(dictation::run(config, tx));
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                DictationEvent::RecordingStarted => {
                    self.state = DictationState::Recording;
                    self.toasts.info("Recording...", "Speak now");
                    self.add_log("Recording started".to_string());
                }
                DictationEvent::ProcessingStarted => {
                    self.state = DictationState::Processing;
                    self.toasts.info("Processing...", "Converting speech to text");
                    self.add_log("Recording finished, transcribing".to_string());
                }
                DictationEvent::Finished { text, pasted } => {
                    self.state = DictationState::Idle;
                    self.dictation_screen.transcription = Some(text);
                    self.toasts.success("Success", success_message(pasted));
                    self.add_log("Dictation complete".to_string());
                }
                DictationEvent::Failed { message } => {
                    self.state = DictationState::Idle;
                    self.dictation_screen.error = Some(message.clone());
                    self.toasts.error("Error", message.clone());
                    self.add_log(format!("Error: {}", message));
                }
            }
        }
    }

    fn save_config(&mut self) {
        self.settings_screen.to_config(&mut self.config);

        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
            self.toasts.error("Error", format!("Failed to save config: {}", e));
        }
    }

    fn add_log(&mut self, message: String) {
        tracing::info!("{}", message);
        self.activity_log.push(message);

        if self.activity_log.len() > 100 {
            self.activity_log.remove(0);
        }
    }
}

/// The paste keystroke is only simulated on some platforms and can be turned
/// off in the config; the toast reflects what actually happened.
fn success_message(pasted: bool) -> &'static str {
    if pasted {
        "Text inserted into active input"
    } else {
        "Text copied to clipboard"
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_screen, Screen::Dictation, "🎤 Dictation");
                ui.selectable_value(&mut self.current_screen, Screen::Settings, "⚙️ Settings");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.current_screen {
                Screen::Dictation => {
                    if let DictationAction::StartDictation =
                        self.dictation_screen.ui(ui, self.state)
                    {
                        self.start_dictation();
                    }
                }
                Screen::Settings => {
                    if let SettingsAction::SaveConfig = self.settings_screen.ui(ui) {
                        self.save_config();
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("log_panel")
            .min_height(80.0)
            .show(ctx, |ui| {
                ui.heading("Activity");
                ui.separator();

                egui::ScrollArea::vertical().max_height(60.0).show(ui, |ui| {
                    for entry in self.activity_log.iter().rev().take(20) {
                        ui.label(entry);
                    }
                });
            });

        self.toasts.render(ctx);

        // Keep repainting while a dictation is in flight so events and toast
        // fades are picked up promptly.
        if self.state != DictationState::Idle || !self.toasts.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_reflects_outcome() {
        assert_eq!(success_message(true), "Text inserted into active input");
        assert_eq!(success_message(false), "Text copied to clipboard");
    }
}
