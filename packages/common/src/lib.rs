//! Value types shared across the folio workspace: character ranges and
//! markup provenance.

pub mod error;
pub mod range;
pub mod representation;
pub mod result;

pub use error::*;
pub use range::*;
pub use representation::*;
pub use result::*;
