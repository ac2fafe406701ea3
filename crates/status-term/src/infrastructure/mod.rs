//! Infrastructure layer providing external integrations.
//!
//! This module contains the network client that performs the status check.

pub mod clients;
