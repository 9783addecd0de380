//! Commonly used items for convenient importing.
//!
//! ```
//! use incident::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> incident::Result<i32> {
//!     if b == 0 {
//!         raise!("DivisionByZero" => "cannot divide {} by zero", a);
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert_eq!(divide(1, 0).unwrap_err().name(), "DivisionByZero");
//! ```

pub use crate::{Data, Incident, Kind, ResultExt, incident, raise};
