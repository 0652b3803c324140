//! Voice commands.
//!
//! Recognised speech arrives as free text. [`parse_transcript`] maps it onto a
//! fixed command vocabulary; [`VoiceCommands`] fans matched commands out to
//! the subscribers currently listening.

use std::collections::HashMap;
use std::fmt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceCommand {
    Add,
    Complete,
    Show,
    Search,
    Toggle,
    Celebrate,
}

/// One entry of the command vocabulary
#[derive(Debug, Clone, Copy)]
pub struct CommandPhrase {
    pub phrase: &'static str,
    pub command: VoiceCommand,
    pub description: &'static str,
}

pub const VOCABULARY: [CommandPhrase; 6] = [
    CommandPhrase {
        phrase: "add task",
        command: VoiceCommand::Add,
        description: "Add a new task",
    },
    CommandPhrase {
        phrase: "complete task",
        command: VoiceCommand::Complete,
        description: "Mark task as complete",
    },
    CommandPhrase {
        phrase: "show tasks",
        command: VoiceCommand::Show,
        description: "Display all tasks",
    },
    CommandPhrase {
        phrase: "search tasks",
        command: VoiceCommand::Search,
        description: "Search through tasks",
    },
    CommandPhrase {
        phrase: "toggle view",
        command: VoiceCommand::Toggle,
        description: "Switch between grid and spatial view",
    },
    CommandPhrase {
        phrase: "celebrate",
        command: VoiceCommand::Celebrate,
        description: "Trigger celebration mode",
    },
];

impl VoiceCommand {
    /// Action token of the command
    pub fn token(&self) -> &'static str {
        match self {
            VoiceCommand::Add => "add",
            VoiceCommand::Complete => "complete",
            VoiceCommand::Show => "show",
            VoiceCommand::Search => "search",
            VoiceCommand::Toggle => "toggle",
            VoiceCommand::Celebrate => "celebrate",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        VOCABULARY
            .iter()
            .map(|entry| entry.command)
            .find(|command| command.token() == token)
    }
}

impl fmt::Display for VoiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Match a transcript against the vocabulary. The first phrase contained in the
/// lower-cased transcript wins.
pub fn parse_transcript(transcript: &str) -> Option<VoiceCommand> {
    let text = transcript.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    VOCABULARY
        .iter()
        .find(|entry| text.contains(entry.phrase))
        .map(|entry| entry.command)
}

pub type SubscriptionId = u64;

/// Command source with explicit subscribe/unsubscribe lifecycle
#[derive(Debug, Default)]
pub struct VoiceCommands {
    supported: bool,
    subscribers: HashMap<SubscriptionId, mpsc::UnboundedSender<VoiceCommand>>,
    next_id: SubscriptionId,
}

impl VoiceCommands {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            subscribers: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn subscribe(&mut self) -> (SubscriptionId, mpsc::UnboundedReceiver<VoiceCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.insert(id, tx);
        (id, rx)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Send a command to every live subscriber. Returns how many received it.
    pub fn dispatch(&mut self, command: VoiceCommand) -> usize {
        if !self.supported {
            return 0;
        }
        // Receivers that were dropped without unsubscribing are pruned here
        self.subscribers.retain(|_, tx| tx.send(command).is_ok());
        self.subscribers.len()
    }

    /// Parse a transcript and dispatch the matching command, if any
    pub fn hear(&mut self, transcript: &str) -> Option<VoiceCommand> {
        if !self.supported {
            return None;
        }
        let command = parse_transcript(transcript)?;
        log::info!("Voice: '{}' matched command '{}'", transcript.trim(), command);
        self.dispatch(command);
        Some(command)
    }
}
