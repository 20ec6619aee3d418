// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the core test-support library.

use thiserror::Error;

// =============================================================================
// ContainerError
// =============================================================================

/// Errors produced by [`Container`](crate::container::Container) lookups.
///
/// Construction paths that merely generate data cannot fail; errors arise
/// only when an explicit registration is required and missing, or when a
/// registered value does not have the expected concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// No dependency was registered for the requested trait object.
    #[error("no dependency registered for `{type_name}`; register one (or a mock bound to it) before resolving the system under test")]
    MissingDependency {
        /// Name of the requested dependency type.
        type_name: &'static str,
    },

    /// A registered value could not be downcast to the requested type.
    #[error("registered value for `{type_name}` has an unexpected concrete type")]
    TypeMismatch {
        /// Name of the requested type.
        type_name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_message_names_the_type() {
        let error = ContainerError::MissingDependency {
            type_name: "dyn deskbooker::DeskRepository",
        };

        let message = error.to_string();
        assert!(message.contains("dyn deskbooker::DeskRepository"));
        assert!(message.contains("register"));
    }
}
