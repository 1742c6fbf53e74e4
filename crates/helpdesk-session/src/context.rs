//! ConversationLog: one session's retained turns.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use helpdesk_core::models::ChatTurn;

/// Retained history for one session.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    pub session_id: String,
    /// The first system turn ever appended; never evicted.
    pub system_turn: Option<ChatTurn>,
    /// Most recent turns, oldest first.
    pub turns: VecDeque<ChatTurn>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl ConversationLog {
    pub fn new(session_id: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            system_turn: None,
            turns: VecDeque::new(),
            created_at: now,
            last_activity: now,
        }
    }

    /// Append a turn and trim the tail to `max_turns`.
    ///
    /// The first system turn is pinned; later system turns are kept in the
    /// tail like any other turn. Returns how many turns were evicted.
    pub fn push(&mut self, turn: ChatTurn, max_turns: usize) -> usize {
        self.last_activity = Utc::now();
        if turn.is_system() && self.system_turn.is_none() {
            self.system_turn = Some(turn);
            return 0;
        }

        self.turns.push_back(turn);
        let mut evicted = 0;
        while self.turns.len() > max_turns {
            self.turns.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// System turn (if any) followed by the tail.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.system_turn
            .iter()
            .chain(self.turns.iter())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len() + usize::from(self.system_turn.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time since the last append.
    pub fn idle_duration(&self) -> Duration {
        Utc::now() - self.last_activity
    }
}
