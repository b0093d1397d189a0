// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Oshpaz integration tests.

pub mod mock_channel;
pub mod store;

pub use mock_channel::MockChannel;
pub use store::{sample_draft, sample_order, temp_order_log};
