//! Constructing bare events from an identifier and arguments, outside a
//! document parse
//!
//! The solver mirrors the decoder registry (same handlers, same
//! default-argument memoization) but its state is independent, so
//! building standalone events never disturbs what a document-level
//! converter has memoized.

use crate::error::MmmlError;
use crate::language::{install_decoders, Event};
use crate::registry::Registry;

pub struct EventSolver {
    registry: Registry,
}

impl EventSolver {
    /// A solver preloaded with the builtin handlers (`n`, `r`, `seq`,
    /// `sim`).
    pub fn new() -> EventSolver {
        let mut registry = Registry::new();
        install_decoders(&mut registry);
        EventSolver { registry }
    }

    /// A solver over a caller-assembled registry.
    pub fn with_registry(registry: Registry) -> EventSolver {
        EventSolver { registry }
    }

    /// Install or replace a handler.
    pub fn register<F>(&mut self, name: &str, solver: F)
    where
        F: Fn(&[String]) -> Result<Event, MmmlError> + 'static,
    {
        self.registry
            .register(name, solver)
    }

    /// Forget all memoized default arguments.
    pub fn reset_defaults(&mut self) {
        self.registry
            .reset_defaults()
    }

    /// Build the event the given identifier's handler produces for these
    /// arguments, with the usual default backfill applied.
    pub fn solve(&mut self, identifier: &str, arguments: &[String]) -> Result<Event, MmmlError> {
        self.registry
            .invoke(identifier, arguments)
    }
}
