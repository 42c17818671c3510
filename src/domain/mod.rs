// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the state machines built
//! on top of it stay testable without a GUI or a network.
//!
//! # Modules
//!
//! - [`people`]: Face groups, face references and their identifiers
//!   ([`FaceGroup`](people::FaceGroup), [`FaceRef`](people::FaceRef),
//!   [`PageSize`](people::PageSize))

pub mod people;
