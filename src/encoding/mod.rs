//! Encoding events back into MMML text

use tracing::debug;

use crate::error::MmmlError;
use crate::language::{install_encoders, Event, EventKind};
use crate::registry::EncoderRegistry;
use crate::INDENTATION;

/// Serializes an event tree into MMML text that decodes back to an equal
/// tree. Comes preloaded with the builtin encoders for notes, rests and
/// containers.
pub struct EventToExpression {
    registry: EncoderRegistry,
}

impl EventToExpression {
    pub fn new() -> EventToExpression {
        let mut registry = EncoderRegistry::new();
        install_encoders(&mut registry);
        EventToExpression { registry }
    }

    /// A converter over a caller-assembled encoder registry.
    pub fn with_registry(registry: EncoderRegistry) -> EventToExpression {
        EventToExpression { registry }
    }

    /// Install or replace an encoder for the given event variants.
    pub fn register<F>(&mut self, kinds: &[EventKind], encoder: F)
    where
        F: Fn(&Event, &EncoderRegistry) -> Result<String, MmmlError> + 'static,
    {
        self.registry
            .register(kinds, encoder)
    }

    pub fn convert(&self, event: &Event) -> Result<String, MmmlError> {
        let expression = self
            .registry
            .encode(event)?;
        debug!(
            "encoded a {} expression",
            event
                .kind()
                .name()
        );
        Ok(expression)
    }
}

/// Serialize children into an indented block: a leading blank line, every
/// non-empty line of each child's encoding prefixed with one indentation
/// unit, and a trailing blank line. An empty child list yields an empty
/// block. This is the exact inverse of what the block segmenter strips,
/// which is what makes round-trips lossless.
pub fn children_to_block(
    registry: &EncoderRegistry,
    children: &[Event],
) -> Result<String, MmmlError> {
    if children.is_empty() {
        return Ok(String::new());
    }

    let mut block = vec![String::new()];
    for child in children {
        let expression = registry.encode(child)?;
        for line in expression.split('\n') {
            if line.is_empty() {
                block.push(String::new());
            } else {
                block.push(format!("{}{}", INDENTATION, line));
            }
        }
    }
    block.push(String::new());

    Ok(block.join("\n"))
}
