//! Shared test doubles for the bot crate's integration tests.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mocks;
