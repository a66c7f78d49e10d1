//! HTTP handlers for the Invoicing Server

pub mod invoice;
pub mod item;
pub mod purchase;

pub use invoice::*;
pub use item::*;
pub use purchase::*;
