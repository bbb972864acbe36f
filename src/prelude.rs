//! optikit prelude.
//!
//! This module contains the most used types and traits that you can import
//! easily as a group.
//!
//! ```
//! use optikit::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::error::MinimizerError;

#[doc(no_inline)]
pub use crate::minimize::{MultiDimFn, NelderMead, NelderMeadOptions, NelderMeadResult, ObjFn};
