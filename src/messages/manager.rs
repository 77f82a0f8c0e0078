use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use uuid::Uuid;

use super::UiMessage;
use crate::config::MessagesConfig;

/// Pause between hiding a message and showing the next queued one.
///
/// Readers that coalesce updates still observe the empty slot.
pub const HANDOFF_GAP: Duration = Duration::from_millis(250);

/// Ordered feed of "currently visible message, or none".
///
/// The first value received is the message visible at subscription time.
pub type MessageSubscription = mpsc::UnboundedReceiver<Option<UiMessage>>;

enum MessageCommand {
    Emit(UiMessage),
    ClearCurrent,
    Clear(Uuid),
    Subscribe(mpsc::UnboundedSender<Option<UiMessage>>),
    #[cfg(test)]
    CountSubscribers(tokio::sync::oneshot::Sender<usize>),
}

/// Handle to the message queue task.
///
/// Cloning is cheap; the task stops once every handle is dropped.
#[derive(Clone)]
pub struct UiMessageManager {
    commands: mpsc::UnboundedSender<MessageCommand>,
}

impl UiMessageManager {
    /// Start the queue task on the current tokio runtime.
    pub fn spawn(config: &MessagesConfig) -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let queue = MessageQueue {
            pending: VecDeque::with_capacity(config.pending_capacity),
            capacity: config.pending_capacity.max(1),
            max_visible: config.max_visible(),
            visible: None,
            resume_at: None,
            subscribers: Vec::new(),
        };
        tokio::spawn(queue.run(receiver));
        Self { commands }
    }

    /// Queue a message for display.
    pub fn emit(&self, message: UiMessage) {
        self.send(MessageCommand::Emit(message));
    }

    /// Hide the visible message, if any.
    pub fn clear_current(&self) {
        self.send(MessageCommand::ClearCurrent);
    }

    /// Remove the message with `id`, whether visible or still pending.
    pub fn clear(&self, id: Uuid) {
        self.send(MessageCommand::Clear(id));
    }

    pub fn subscribe(&self) -> MessageSubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.send(MessageCommand::Subscribe(sender));
        receiver
    }

    fn send(&self, command: MessageCommand) {
        if self.commands.send(command).is_err() {
            tracing::trace!("Message queue task is gone, command dropped");
        }
    }
}

struct MessageQueue {
    pending: VecDeque<UiMessage>,
    capacity: usize,
    max_visible: Duration,
    visible: Option<(UiMessage, Instant)>,
    resume_at: Option<Instant>,
    subscribers: Vec<mpsc::UnboundedSender<Option<UiMessage>>>,
}

impl MessageQueue {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<MessageCommand>) {
        loop {
            self.show_next();

            let deadline = match &self.visible {
                Some((_, expires)) => Some(*expires),
                None if !self.pending.is_empty() => self.resume_at,
                None => None,
            };
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if self.visible.is_some() {
                        tracing::trace!("Visible message expired");
                        self.hide();
                    }
                }
            }
        }
    }

    fn handle(&mut self, command: MessageCommand) {
        match command {
            MessageCommand::Emit(message) => {
                if self.pending.len() == self.capacity {
                    if let Some(dropped) = self.pending.pop_front() {
                        tracing::debug!(id = %dropped.id, "Message queue full, dropping oldest");
                    }
                }
                self.pending.push_back(message);
            }
            MessageCommand::ClearCurrent => self.hide(),
            MessageCommand::Clear(id) => {
                if self.visible.as_ref().is_some_and(|(message, _)| message.id == id) {
                    self.hide();
                } else {
                    self.pending.retain(|message| message.id != id);
                }
            }
            MessageCommand::Subscribe(subscriber) => {
                self.subscribers.retain(|existing| !existing.is_closed());
                let current = self.visible.as_ref().map(|(message, _)| message.clone());
                if subscriber.send(current).is_ok() {
                    self.subscribers.push(subscriber);
                }
            }
            #[cfg(test)]
            MessageCommand::CountSubscribers(reply) => {
                let _ = reply.send(self.subscribers.len());
            }
        }
    }

    fn show_next(&mut self) {
        if self.visible.is_some() {
            return;
        }
        if self.resume_at.is_some_and(|at| Instant::now() < at) {
            return;
        }
        if let Some(next) = self.pending.pop_front() {
            let deadline = Instant::now() + self.max_visible;
            self.publish(Some(next.clone()));
            self.visible = Some((next, deadline));
        }
    }

    fn hide(&mut self) {
        if self.visible.take().is_some() {
            self.publish(None);
            self.resume_at = Some(Instant::now() + HANDOFF_GAP);
        }
    }

    fn publish(&mut self, message: Option<UiMessage>) {
        self.subscribers
            .retain(|subscriber| subscriber.send(message.clone()).is_ok());
    }
}
