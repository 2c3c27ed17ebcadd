//! The pricing operations proper: rate selection, conversion, margin, tax,
//! and the quotation breakdown built from them.

pub mod breakdown;
pub mod conversion;
pub mod margin;
pub mod selector;
pub mod tax;
