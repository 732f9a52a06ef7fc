//! Modal alert used for download and save feedback.

use egui::{Context, RichText};

/// Pending alert message, if any
#[derive(Debug, Default)]
pub struct AlertState {
    message: Option<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(message) = self.message.clone() else {
            return;
        };

        let mut is_open = true;
        let mut dismissed = false;
        egui::Window::new("Alert!")
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut is_open)
            .show(ctx, |ui| {
                ui.label(RichText::new(message).size(14.0));
                ui.add_space(8.0);
                if ui.button("Dismiss").clicked() {
                    dismissed = true;
                }
            });

        if dismissed || !is_open {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut alert = AlertState::new();
        assert_eq!(alert.message(), None);

        alert.show("Downloaded data to csv!");
        assert_eq!(alert.message(), Some("Downloaded data to csv!"));

        alert.dismiss();
        assert_eq!(alert.message(), None);
    }
}
