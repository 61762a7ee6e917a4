use std::sync::mpsc;

use log::debug;
use serde::Serialize;

use crate::domain::RosterEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// What the editor tells the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Complete roster after a change
    RosterChanged(Vec<RosterEntry>),
    Notice(Notice),
}

pub trait EventSink {
    fn emit(&mut self, event: EditorEvent);
}

impl EventSink for Vec<EditorEvent> {
    fn emit(&mut self, event: EditorEvent) {
        self.push(event);
    }
}

impl EventSink for mpsc::Sender<EditorEvent> {
    fn emit(&mut self, event: EditorEvent) {
        if self.send(event).is_err() {
            debug!("Editor event dropped, receiver is gone");
        }
    }
}

/// Create a channel carrying editor events to a renderer
pub fn create_event_channel() -> (mpsc::Sender<EditorEvent>, mpsc::Receiver<EditorEvent>) {
    mpsc::channel()
}
