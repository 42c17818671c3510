// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and orchestration boundaries.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to the server only through these ports
//!
//! # Example
//!
//! ```ignore
//! use people_lens::application::port::RemoteDataPort;
//! use people_lens::infrastructure::graphql::GraphQlClient;
//!
//! // Infrastructure implements the port trait
//! let port: std::sync::Arc<dyn RemoteDataPort> = std::sync::Arc::new(client);
//! ```

pub mod port;
