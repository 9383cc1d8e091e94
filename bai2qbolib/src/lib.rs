//! bai2qbolib: reads BAI2 bank statements and writes them out as CSV and OFX/QBO.

pub mod convert;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod traits;
pub mod type_codes;

pub mod formats {
    pub mod bai2;
    pub mod csv;
    pub mod ofx;
}
