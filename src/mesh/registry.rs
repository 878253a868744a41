//! Name-to-action dispatch table for a parent command's subcommands

use log::debug;

use crate::error::{MeshError, Result};

/// One subcommand bound to the action that runs it
#[derive(Debug, Clone, Copy)]
pub struct Registration<A> {
    pub name: &'static str,
    pub action: A,
}

/// Ordered set of subcommands registered under a parent command.
///
/// Lookup is an exact, case-sensitive match on the name token.
#[derive(Debug)]
pub struct CommandRegistry<A> {
    parent: &'static str,
    entries: Vec<Registration<A>>,
}

impl<A: Copy> CommandRegistry<A> {
    /// Build a registry; names must be unique within the parent
    pub fn new(parent: &'static str, entries: &[(&'static str, A)]) -> Self {
        let entries: Vec<Registration<A>> = entries
            .iter()
            .map(|&(name, action)| Registration { name, action })
            .collect();
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, a)| entries[i + 1..].iter().all(|b| b.name != a.name)),
            "duplicate subcommand registered under '{}'",
            parent
        );
        Self { parent, entries }
    }

    /// Parent command name
    pub fn parent(&self) -> &'static str {
        self.parent
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.to_string()).collect()
    }

    /// Confirm that `requested` is a registered subcommand
    pub fn validate(&self, requested: &str) -> Result<A> {
        match self.entries.iter().find(|e| e.name == requested) {
            Some(entry) => Ok(entry.action),
            None => {
                debug!(
                    "'{}' is not a subcommand of '{}' (available: {:?})",
                    requested,
                    self.parent,
                    self.names()
                );
                Err(MeshError::InvalidSubcommand {
                    parent: self.parent.to_string(),
                    requested: requested.to_string(),
                    available: self.names(),
                })
            }
        }
    }

    /// Split raw arguments into the validated action and its remaining arguments
    pub fn dispatch<'a>(&self, args: &'a [String]) -> Result<(A, &'a [String])> {
        let Some((first, rest)) = args.split_first() else {
            debug!("No subcommand given for '{}'", self.parent);
            return Err(MeshError::MissingSubcommand {
                parent: self.parent.to_string(),
                available: self.names(),
            });
        };
        Ok((self.validate(first)?, rest))
    }
}
