//! Status line and transient toast notifications

use std::time::{Duration, Instant};

use eframe::egui;
use tracing::{error, info, warn};

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "\u{2139}",
            NotificationKind::Success => "\u{2714}",
            NotificationKind::Warning => "\u{26A0}",
            NotificationKind::Error => "\u{274C}",
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            NotificationKind::Info => INFO_COLOR,
            NotificationKind::Success => SUCCESS_COLOR,
            NotificationKind::Warning => WARNING_COLOR,
            NotificationKind::Error => ERROR_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: NotificationKind,
}

impl StatusMessage {
    /// Status line text with the kind's icon in front
    pub fn line(&self) -> String {
        format!("{}  {}", self.kind.icon(), self.text)
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: StatusMessage,
    expires_at: Instant,
}

/// Owns the footer status message and the current toast
#[derive(Debug)]
pub struct Notifier {
    status: Option<StatusMessage>,
    toast: Option<Toast>,
    toast_duration: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self {
            status: None,
            toast: None,
            toast_duration: Duration::from_millis(TOAST_DURATION_MS),
        }
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the status line and replace any visible toast
    pub fn notify(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.notify_at(kind, text, Instant::now());
    }

    fn notify_at(&mut self, kind: NotificationKind, text: impl Into<String>, now: Instant) {
        let message = StatusMessage { text: text.into(), kind };
        match kind {
            NotificationKind::Error => error!(message = %message.text, "Notification"),
            NotificationKind::Warning => warn!(message = %message.text, "Notification"),
            _ => info!(message = %message.text, "Notification"),
        }

        self.toast = Some(Toast {
            message: message.clone(),
            expires_at: now + self.toast_duration,
        });
        self.status = Some(message);
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Toast still on screen at `now`, dropping it once expired
    fn active_toast(&mut self, now: Instant) -> Option<(&StatusMessage, Duration)> {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
        self.toast
            .as_ref()
            .map(|t| (&t.message, t.expires_at.saturating_duration_since(now)))
    }

    /// Draw the toast in the bottom-right corner and schedule its removal
    pub fn show_toast(&mut self, ctx: &egui::Context) {
        let Some((message, remaining)) = self.active_toast(Instant::now()) else {
            return;
        };

        egui::Area::new(egui::Id::new("toast_notification"))
            .order(egui::Order::Foreground)
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                [-TOAST_MARGIN, -(FOOTER_HEIGHT + TOAST_MARGIN)],
            )
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, message.kind.color()))
                    .corner_radius(10.0)
                    .inner_margin(15.0)
                    .show(ui, |ui| {
                        ui.set_max_width(TOAST_MAX_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(message.kind.icon())
                                    .size(20.0)
                                    .color(message.kind.color()),
                            );
                            ui.label(&message.text);
                        });
                    });
            });

        ctx.request_repaint_after(remaining);
    }
}
