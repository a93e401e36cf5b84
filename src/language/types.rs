//! Types representing the decoded MMML event tree

use serde::Serialize;

use crate::language::{Fraction, Pitch, Volume};

/// A decoded MMML event: a leaf (note or rest) or a container owning an
/// ordered sequence of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    Note(Note),
    Rest(Rest),
    Sequence(Container),
    Simultaneous(Container),
}

/// The variant of an [Event], used as the key into the encoder registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Note,
    Rest,
    Sequence,
    Simultaneous,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Note => "note",
            EventKind::Rest => "rest",
            EventKind::Sequence => "sequence",
            EventKind::Simultaneous => "simultaneous",
        }
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Note(_) => EventKind::Note,
            Event::Rest(_) => EventKind::Rest,
            Event::Sequence(_) => EventKind::Sequence,
            Event::Simultaneous(_) => EventKind::Simultaneous,
        }
    }

    /// Whether an indented body under this event's header is consumed as
    /// children. A rest has no body; anything indented under one is
    /// ignored.
    pub fn accepts_children(&self) -> bool {
        !matches!(self, Event::Rest(_))
    }

    /// Append a child in document order. Containers grow their child
    /// list, notes their grace-note sequence; a rest drops the child.
    pub fn append(&mut self, child: Event) {
        match self {
            Event::Note(note) => note
                .grace_notes
                .push(child),
            Event::Sequence(container) | Event::Simultaneous(container) => container
                .children
                .push(child),
            Event::Rest(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub duration: Fraction,
    pub pitches: Vec<Pitch>,
    pub volume: Option<Volume>,
    /// Ornament notes played before this one, written as an indented
    /// block under the note's header.
    pub grace_notes: Vec<Event>,
}

impl Note {
    pub fn new(duration: Fraction, pitches: Vec<Pitch>, volume: Option<Volume>) -> Note {
        Note {
            duration,
            pitches,
            volume,
            grace_notes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rest {
    pub duration: Fraction,
}

/// The payload of a sequential or simultaneous event: an optional tag and
/// the children in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub tag: Option<String>,
    pub children: Vec<Event>,
}

impl Container {
    pub fn new(tag: Option<String>) -> Container {
        Container {
            tag,
            children: Vec::new(),
        }
    }
}
