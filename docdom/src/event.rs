use std::collections::VecDeque;

use crate::tree::NodeId;

/// Events emitted by the widget controllers.
///
/// One variant per event kind, each carrying the node it concerns. Controllers
/// push onto an [`EventQueue`]; they never hold a reference to whoever
/// consumes the events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A panel transitioned to open.
    PanelOpened { panel: NodeId },
    /// A panel transitioned to closed.
    PanelClosed { panel: NodeId },
    /// A tab became active and its content pane was revealed.
    TabShown { tab: NodeId },
    /// The already-active tab was activated again; no state changed.
    TabAlreadyShown { tab: NodeId },
}

/// FIFO queue of widget events for one page.
///
/// All events produced while handling one user activation are drained to
/// completion before the next activation is processed; handlers may push
/// further events, which land at the back of the queue.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<UiEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: UiEvent) {
        log::trace!("[event] queued {event:?}");
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<UiEvent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
