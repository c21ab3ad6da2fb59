// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Library error types

/// Graph operation error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The vertex was never an endpoint of an inserted edge.
    #[error("Vertex not found: {vertex}")]
    VertexNotFound {
        /// Debug rendering of the missing vertex
        vertex: String,
    },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
