//! Test suite for XFChat Lists
//!
//! This module organizes all tests

pub mod integration;
