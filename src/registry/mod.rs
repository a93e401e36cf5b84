//! Handler registries: identifier-keyed for decoding and solving,
//! variant-keyed for encoding

use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::error::MmmlError;
use crate::language::{Event, EventKind};

type Handler = Box<dyn Fn(&[String]) -> Result<Event, MmmlError>>;

/// Maps header identifiers to handler functions, and remembers the most
/// recently supplied arguments per identifier so that later, shorter
/// argument lists inherit the trailing positions of earlier ones.
///
/// One instance backs document decoding, a second independent instance
/// backs bare-object solving; they share nothing but this type.
pub struct Registry {
    handlers: HashMap<String, Handler>,
    defaults: HashMap<String, Vec<String>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            handlers: HashMap::new(),
            defaults: HashMap::new(),
        }
    }

    /// Install a handler under the given identifier, replacing any
    /// previous one.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&[String]) -> Result<Event, MmmlError> + 'static,
    {
        if self
            .handlers
            .contains_key(name)
        {
            warn!("handler '{}' already exists and is overridden now", name);
        }
        self.handlers
            .insert(name.to_string(), Box::new(handler));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers
            .contains_key(name)
    }

    /// Look up the handler for `name` and call it with the backfilled
    /// argument list: the supplied arguments, extended with whatever
    /// trailing positions the defaults cache holds for this identifier.
    pub fn invoke(&mut self, name: &str, arguments: &[String]) -> Result<Event, MmmlError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| MmmlError::UnknownIdentifier(name.to_string()))?;

        // Fold the raw arguments into the running defaults before
        // backfilling, so the cache only ever holds user-supplied values.
        let defaults = self
            .defaults
            .entry(name.to_string())
            .or_default();
        if arguments.len() > defaults.len() {
            *defaults = arguments.to_vec();
        } else {
            for (i, argument) in arguments
                .iter()
                .enumerate()
            {
                defaults[i] = argument.clone();
            }
        }

        let mut call = arguments.to_vec();
        call.extend_from_slice(&defaults[arguments.len()..]);

        handler(&call)
    }

    /// Clear the memoized arguments for every identifier. Registered
    /// handlers are unaffected.
    pub fn reset_defaults(&mut self) {
        self.defaults
            .clear();
    }
}

type Encoder = Rc<dyn Fn(&Event, &EncoderRegistry) -> Result<String, MmmlError>>;

/// Maps event variants to serializer functions. Independent of [Registry]
/// and without any argument memoization: encoding is a pure function of
/// the event.
pub struct EncoderRegistry {
    encoders: HashMap<EventKind, Encoder>,
}

impl EncoderRegistry {
    pub fn new() -> EncoderRegistry {
        EncoderRegistry {
            encoders: HashMap::new(),
        }
    }

    /// Install one encoder under several variants at once, replacing any
    /// previous ones.
    pub fn register<F>(&mut self, kinds: &[EventKind], encoder: F)
    where
        F: Fn(&Event, &EncoderRegistry) -> Result<String, MmmlError> + 'static,
    {
        let encoder: Encoder = Rc::new(encoder);
        for kind in kinds {
            if self
                .encoders
                .contains_key(kind)
            {
                warn!(
                    "encoder for '{}' already exists and is overridden now",
                    kind.name()
                );
            }
            self.encoders
                .insert(*kind, Rc::clone(&encoder));
        }
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.encoders
            .contains_key(&kind)
    }

    /// Serialize an event through the encoder registered for its variant.
    /// The registry is passed back to the encoder so container encoders
    /// can recurse into their children.
    pub fn encode(&self, event: &Event) -> Result<String, MmmlError> {
        let encoder = self
            .encoders
            .get(&event.kind())
            .ok_or(MmmlError::UnknownEncoder(
                event
                    .kind()
                    .name(),
            ))?;
        encoder(event, self)
    }
}
