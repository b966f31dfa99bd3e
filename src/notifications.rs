use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Toast notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn color(&self) -> egui::Color32 {
        match self {
            ToastLevel::Info => egui::Color32::from_rgb(33, 150, 243),
            ToastLevel::Success => egui::Color32::from_rgb(76, 175, 80),
            ToastLevel::Error => egui::Color32::from_rgb(244, 67, 54),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }
}

/// A single transient status message
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Local>,
    pub duration_secs: f32,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Local::now(),
            duration_secs: 3.0,
        }
    }

    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration_secs = seconds;
        self
    }

    fn age_secs(&self) -> f32 {
        Local::now()
            .signed_duration_since(self.created_at)
            .num_milliseconds() as f32
            / 1000.0
    }

    pub fn is_expired(&self) -> bool {
        self.age_secs() >= self.duration_secs
    }

    /// Opacity based on remaining time (fade out over the last 0.5s)
    pub fn opacity(&self) -> f32 {
        let remaining = self.duration_secs - self.age_secs();
        if remaining < 0.5 {
            (remaining / 0.5).max(0.0)
        } else {
            1.0
        }
    }
}

/// Queue of transient toasts rendered in the top-right corner
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    max_toasts: usize,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            max_toasts: 4,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        self.cleanup();
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Info, title, message));
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Success, title, message));
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Error, title, message));
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());

        while self.toasts.len() > self.max_toasts {
            self.toasts.pop_front();
        }
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        let screen_rect = ctx.screen_rect();
        let margin = 10.0;
        let toast_width = 300.0;
        let mut y_offset = margin;

        for (idx, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            egui::Area::new(egui::Id::new(("toast", idx)))
                .fixed_pos(egui::pos2(
                    screen_rect.right() - toast_width - margin,
                    screen_rect.top() + y_offset,
                ))
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(egui::Color32::from_rgba_premultiplied(
                            40,
                            40,
                            40,
                            (200.0 * opacity) as u8,
                        ))
                        .stroke(egui::Stroke::new(
                            1.0,
                            toast.level.color().linear_multiply(opacity),
                        ))
                        .rounding(5.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.set_width(toast_width);

                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(toast.level.icon())
                                        .size(18.0)
                                        .color(toast.level.color().linear_multiply(opacity)),
                                );

                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(&toast.title)
                                            .strong()
                                            .color(egui::Color32::WHITE.linear_multiply(opacity)),
                                    );
                                    if !toast.message.is_empty() {
                                        ui.label(
                                            egui::RichText::new(&toast.message).color(
                                                egui::Color32::from_gray(220)
                                                    .linear_multiply(opacity),
                                            ),
                                        );
                                    }
                                });
                            });
                        });
                });

            y_offset += 64.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new(ToastLevel::Info, "Recording", "Speak now").with_duration(0.0);
        assert!(toast.is_expired());

        let toast = Toast::new(ToastLevel::Info, "Recording", "Speak now");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_manager_caps_queue() {
        let mut manager = ToastManager::new();
        for i in 0..10 {
            manager.push(Toast::new(ToastLevel::Info, format!("Toast {}", i), ""));
        }
        assert_eq!(manager.len(), 4);
    }

    #[test]
    fn test_manager_levels() {
        let mut manager = ToastManager::new();
        manager.info("Recording...", "Speak now");
        manager.success("Success", "Text inserted into active input");
        manager.error("Error", "something went wrong");
        assert_eq!(manager.len(), 3);
    }
}
