//! Business logic services for the Invoicing Server

pub mod invoice;
pub mod item;
pub mod purchase;

pub use invoice::InvoiceService;
pub use item::ItemService;
pub use purchase::PurchaseService;
