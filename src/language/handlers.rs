//! Builtin decoders and encoders for the musical event model
//!
//! These are ordinary registry entries; callers can replace any of them
//! or register additional identifiers next to them.

use crate::encoding::children_to_block;
use crate::error::MmmlError;
use crate::language::{
    parse_pitch_list, Container, Event, EventKind, Fraction, Note, Rest, Volume,
};
use crate::registry::{EncoderRegistry, Registry};
use crate::IGNORE_TOKEN;

/// Install the builtin decoders. The same handlers back both the decoder
/// registry and the solver registry.
pub fn install_decoders(registry: &mut Registry) {
    registry.register("n", note);
    registry.register("r", rest);
    registry.register("seq", sequence);
    registry.register("sim", simultaneous);
}

/// Install the builtin encoders: one leaf encoder covering notes and
/// rests, one container encoder covering both container variants.
pub fn install_encoders(registry: &mut EncoderRegistry) {
    registry.register(&[EventKind::Note, EventKind::Rest], leaf);
    registry.register(&[EventKind::Sequence, EventKind::Simultaneous], container);
}

/// `n duration pitches volume`. Every position falls back to the
/// handler's own default when missing or given as the ignore token:
/// duration 1, no pitches, no volume.
fn note(arguments: &[String]) -> Result<Event, MmmlError> {
    let duration = duration_argument(arguments, 0)?;
    let pitches = match argument(arguments, 1) {
        Some(token) => parse_pitch_list(token)?,
        None => Vec::new(),
    };
    let volume = match argument(arguments, 2) {
        Some(token) => Some(
            Volume::parse(token).ok_or_else(|| MmmlError::InvalidVolume(token.to_string()))?,
        ),
        None => None,
    };
    Ok(Event::Note(Note::new(duration, pitches, volume)))
}

/// `r duration`. Further arguments are ignored, as is any indented body.
fn rest(arguments: &[String]) -> Result<Event, MmmlError> {
    let duration = duration_argument(arguments, 0)?;
    Ok(Event::Rest(Rest { duration }))
}

/// `seq tag`
fn sequence(arguments: &[String]) -> Result<Event, MmmlError> {
    Ok(Event::Sequence(Container::new(tag_argument(arguments))))
}

/// `sim tag`
fn simultaneous(arguments: &[String]) -> Result<Event, MmmlError> {
    Ok(Event::Simultaneous(Container::new(tag_argument(arguments))))
}

/// The argument at `index`, with the ignore token mapped to absence.
fn argument(arguments: &[String], index: usize) -> Option<&str> {
    match arguments.get(index) {
        Some(token) if token.as_str() != IGNORE_TOKEN => Some(token.as_str()),
        _ => None,
    }
}

fn duration_argument(arguments: &[String], index: usize) -> Result<Fraction, MmmlError> {
    match argument(arguments, index) {
        Some(token) => {
            Fraction::parse(token).ok_or_else(|| MmmlError::InvalidDuration(token.to_string()))
        }
        None => Ok(Fraction::new(1, 1)),
    }
}

fn tag_argument(arguments: &[String]) -> Option<String> {
    argument(arguments, 0).map(str::to_string)
}

fn leaf(event: &Event, registry: &EncoderRegistry) -> Result<String, MmmlError> {
    match event {
        Event::Note(note) => {
            let pitches = if note
                .pitches
                .is_empty()
            {
                IGNORE_TOKEN.to_string()
            } else {
                note.pitches
                    .iter()
                    .map(|pitch| pitch.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            };
            let volume = note
                .volume
                .as_ref()
                .map(Volume::name)
                .unwrap_or(IGNORE_TOKEN);
            let header = format!("n {} {} {}", note.duration, pitches, volume);

            if note
                .grace_notes
                .is_empty()
            {
                Ok(header)
            } else {
                let block = children_to_block(registry, &note.grace_notes)?;
                Ok(format!("{}\n{}", header, block))
            }
        }
        Event::Rest(rest) => Ok(format!("r {}", rest.duration)),
        other => Err(MmmlError::UnknownEncoder(
            other
                .kind()
                .name(),
        )),
    }
}

fn container(event: &Event, registry: &EncoderRegistry) -> Result<String, MmmlError> {
    let (keyword, container) = match event {
        Event::Sequence(container) => ("seq", container),
        Event::Simultaneous(container) => ("sim", container),
        other => {
            return Err(MmmlError::UnknownEncoder(
                other
                    .kind()
                    .name(),
            ))
        }
    };

    // An absent tag renders as the ignore token rather than nothing:
    // a bare header would pick up whatever tag the defaults cache holds
    // for this keyword when the text is decoded again.
    let header = match &container.tag {
        Some(tag) => format!("{} {}", keyword, tag),
        None => format!("{} {}", keyword, IGNORE_TOKEN),
    };
    let block = children_to_block(registry, &container.children)?;

    Ok(format!("{}\n{}", header, block))
}
