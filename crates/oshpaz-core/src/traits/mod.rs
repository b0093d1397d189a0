// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the storefront core and its external collaborators.

pub mod channel;

pub use channel::NotifyChannel;
