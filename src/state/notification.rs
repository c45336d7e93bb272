//! Toast notification lifecycle.
//!
//! ARCHITECTURE
//! ============
//! At most one toast is active. The centre keeps an explicit handle to it,
//! plus the handles of toasts still playing their exit transition. Showing a
//! new toast evicts all of them at once: each eviction is a
//! [`NotificationCommand::Remove`], which also tells the host to drop that
//! toast's timers. Timer callbacks carry the id they were scheduled for and
//! are ignored once that id is gone, so a late auto-dismiss can never hide a
//! newer toast.
//!
//! Lifecycle per toast:
//!
//! ```text
//! show ─▶ Entering ──reveal_elapsed──▶ Shown
//!            │                           │
//!            └───────── dismiss ─────────┴─▶ Leaving ──removal_elapsed──▶ (gone)
//! ```

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use crate::config::NotificationConfig;

/// Identity of one toast, unique for the page lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    /// Parse a kind name; anything unrecognised is `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon name shown next to the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Warning => "fa-exclamation-triangle",
            Self::Info => "fa-info-circle",
        }
    }

    /// Class list for the toast root, e.g. `notification notification-error`.
    #[must_use]
    pub fn root_class(self) -> String {
        format!("{base} {base}-{kind}", base = crate::consts::NOTIFICATION_CLASS, kind = self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted, entrance transition not started.
    Entering,
    /// Carries the show class.
    Shown,
    /// Show class removed; node still attached for the exit transition.
    Leaving,
}

/// Instruction for the DOM layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationCommand {
    /// Detach the node now and drop every timer scheduled for it.
    Remove(NotificationId),
    /// Build the toast node and append it to the document body.
    Insert(Notification),
    /// Call [`NotificationCenter::reveal_elapsed`] after the delay.
    ScheduleReveal { id: NotificationId, delay_ms: u32 },
    /// Call [`NotificationCenter::dismiss`] after the delay.
    ScheduleDismiss { id: NotificationId, delay_ms: u32 },
    /// Drop the pending reveal and auto-dismiss timers.
    CancelPending(NotificationId),
    AddShowClass(NotificationId),
    RemoveShowClass(NotificationId),
    /// Call [`NotificationCenter::removal_elapsed`] after the delay.
    ScheduleRemoval { id: NotificationId, delay_ms: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    active: Option<(NotificationId, NotificationPhase)>,
    leaving: Vec<NotificationId>,
    timings: NotificationConfig,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timings: NotificationConfig) -> Self {
        Self { next_id: 0, active: None, leaving: Vec::new(), timings }
    }

    /// The toast currently entering or shown.
    #[must_use]
    pub fn active(&self) -> Option<NotificationId> {
        self.active.map(|(id, _)| id)
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<NotificationPhase> {
        match self.active {
            Some((active, phase)) if active == id => Some(phase),
            _ => self.leaving.contains(&id).then_some(NotificationPhase::Leaving),
        }
    }

    /// Every toast whose node is still attached, oldest first.
    #[must_use]
    pub fn attached(&self) -> Vec<NotificationId> {
        let mut ids = self.leaving.clone();
        ids.extend(self.active());
        ids
    }

    /// Show `message`, replacing anything currently on screen.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> Vec<NotificationCommand> {
        let mut commands = self.evict();

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.active = Some((id, NotificationPhase::Entering));

        commands.push(NotificationCommand::Insert(Notification { id, message: message.into(), kind }));
        commands.push(NotificationCommand::ScheduleReveal { id, delay_ms: self.timings.reveal_delay_ms });
        commands.push(NotificationCommand::ScheduleDismiss { id, delay_ms: self.timings.auto_dismiss_ms });
        commands
    }

    /// Remove every attached toast immediately, timers included.
    pub fn evict(&mut self) -> Vec<NotificationCommand> {
        let mut commands: Vec<NotificationCommand> =
            self.leaving.drain(..).map(NotificationCommand::Remove).collect();
        if let Some((id, _)) = self.active.take() {
            commands.push(NotificationCommand::Remove(id));
        }
        commands
    }

    /// The entrance delay for `id` elapsed.
    pub fn reveal_elapsed(&mut self, id: NotificationId) -> Vec<NotificationCommand> {
        match &mut self.active {
            Some((active, phase)) if *active == id && *phase == NotificationPhase::Entering => {
                *phase = NotificationPhase::Shown;
                vec![NotificationCommand::AddShowClass(id)]
            }
            _ => Vec::new(),
        }
    }

    /// Close button pressed or auto-dismiss fired for `id`.
    pub fn dismiss(&mut self, id: NotificationId) -> Vec<NotificationCommand> {
        if self.active() != Some(id) {
            return Vec::new();
        }
        self.active = None;
        self.leaving.push(id);
        vec![
            NotificationCommand::CancelPending(id),
            NotificationCommand::RemoveShowClass(id),
            NotificationCommand::ScheduleRemoval { id, delay_ms: self.timings.exit_ms },
        ]
    }

    /// The exit transition for `id` finished.
    pub fn removal_elapsed(&mut self, id: NotificationId) -> Vec<NotificationCommand> {
        let Some(pos) = self.leaving.iter().position(|l| *l == id) else {
            return Vec::new();
        };
        self.leaving.remove(pos);
        vec![NotificationCommand::Remove(id)]
    }
}
