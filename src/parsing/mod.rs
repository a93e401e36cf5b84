//! Decoding MMML text into events

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::MmmlError;
use crate::language::{install_decoders, Event};
use crate::registry::Registry;
use crate::templating;

mod parser;

/// Decodes MMML text into an event tree. Owns the decoder registry and
/// with it the per-identifier default-argument state; construct a fresh
/// converter when you need isolation from earlier conversions.
pub struct ExpressionToEvent {
    registry: Registry,
}

impl ExpressionToEvent {
    /// A converter preloaded with the builtin decoders (`n`, `r`, `seq`,
    /// `sim`).
    pub fn new() -> ExpressionToEvent {
        let mut registry = Registry::new();
        install_decoders(&mut registry);
        ExpressionToEvent { registry }
    }

    /// A converter over a caller-assembled registry.
    pub fn with_registry(registry: Registry) -> ExpressionToEvent {
        ExpressionToEvent { registry }
    }

    /// Install or replace a decoder.
    pub fn register<F>(&mut self, name: &str, decoder: F)
    where
        F: Fn(&[String]) -> Result<Event, MmmlError> + 'static,
    {
        self.registry
            .register(name, decoder)
    }

    /// Forget all memoized default arguments. Registered decoders stay.
    pub fn reset_defaults(&mut self) {
        self.registry
            .reset_defaults()
    }

    /// Decode a single MMML expression.
    pub fn convert(&mut self, expression: &str) -> Result<Event, MmmlError> {
        self.convert_with(expression, &HashMap::<&str, &str>::new())
    }

    /// Decode a single MMML expression after substituting `{name}`
    /// template placeholders from the given context.
    pub fn convert_with<C: Serialize>(
        &mut self,
        expression: &str,
        variables: &C,
    ) -> Result<Event, MmmlError> {
        let rendered = templating::render(expression, variables)?;
        parser::check_single_root(&rendered)?;

        let event = parser::parse_expression(&mut self.registry, &rendered)?;
        debug!(
            "decoded a {} expression",
            event
                .kind()
                .name()
        );

        Ok(event)
    }
}
