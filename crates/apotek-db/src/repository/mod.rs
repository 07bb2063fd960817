//! # Repository Implementations
//!
//! One repository per aggregate:
//!
//! - [`medicine`] - medicine master data, stock/price updates
//! - [`supplier`] - supplier master data (read-mostly)
//! - [`purchase_order`] - PO headers, detail rows, verification join

pub mod medicine;
pub mod purchase_order;
pub mod supplier;
