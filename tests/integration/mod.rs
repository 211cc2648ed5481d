//! Integration tests
//!
//! Render the list components headlessly and drive them with pointer input.

pub mod config_test;
pub mod friend_list_test;
