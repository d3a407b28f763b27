//! Execute handlers for the GIS Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `registry` - Chain/token registry and role management
//! - `swap` - Outbound swap handler
//! - `redeem` - Inbound redeem handler with signature verification

mod redeem;
mod registry;
mod swap;

pub use redeem::*;
pub use registry::*;
pub use swap::*;
