use std::collections::HashMap;

use crate::Xid;

/// The window manager lifecycle events a bar widget can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    ClientManaged,
    UrgentHintChanged,
    ClientKilled,
    WorkspaceChanged,
    WorkspaceRemoved,
    ClientAddedToWorkspace,
}

impl HookKind {
    pub const ALL: [Self; 6] = [
        Self::ClientManaged,
        Self::UrgentHintChanged,
        Self::ClientKilled,
        Self::WorkspaceChanged,
        Self::WorkspaceRemoved,
        Self::ClientAddedToWorkspace,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    ClientManaged { id: Xid },
    UrgentHintChanged { id: Xid, urgent: bool },
    ClientKilled { id: Xid },
    WorkspaceChanged { screen: usize, workspace: usize },
    WorkspaceRemoved { name: String },
    ClientAddedToWorkspace { id: Xid, workspace: usize },
}

impl HookEvent {
    #[must_use]
    pub const fn kind(&self) -> HookKind {
        match self {
            Self::ClientManaged { .. } => HookKind::ClientManaged,
            Self::UrgentHintChanged { .. } => HookKind::UrgentHintChanged,
            Self::ClientKilled { .. } => HookKind::ClientKilled,
            Self::WorkspaceChanged { .. } => HookKind::WorkspaceChanged,
            Self::WorkspaceRemoved { .. } => HookKind::WorkspaceRemoved,
            Self::ClientAddedToWorkspace { .. } => HookKind::ClientAddedToWorkspace,
        }
    }
}

pub type HookCallback = Box<dyn FnMut(&HookEvent)>;

/// A named-event subscription bus.
#[derive(Default)]
pub struct Hooks {
    subscribers: HashMap<HookKind, Vec<HookCallback>>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: HookKind, callback: impl FnMut(&HookEvent) + 'static) {
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Box::new(callback));
    }

    /// Run every callback subscribed to this event's kind, in subscription order.
    ///
    /// Returns how many callbacks ran.
    pub fn fire(&mut self, event: &HookEvent) -> usize {
        let Some(callbacks) = self.subscribers.get_mut(&event.kind()) else {
            tracing::trace!("no subscribers for {:?}", event.kind());
            return 0;
        };

        for callback in callbacks.iter_mut() {
            callback(event);
        }

        tracing::trace!("{:?} dispatched to {} subscribers", event, callbacks.len());

        callbacks.len()
    }

    #[must_use]
    pub fn subscriber_count(&self, kind: HookKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}
