//! Derivative-free minimization of scalar multivariate functions.
//!
//! The crate centers on the Nelder-Mead downhill simplex method: the
//! objective is a black box evaluated point by point, and the optimizer
//! maintains a simplex of `n + 1` vertices that it reflects, expands,
//! contracts, and shrinks toward lower function values.
//!
//! ```
//! use ndarray::prelude::*;
//! use optikit::prelude::*;
//!
//! let bowl = |x: &Array1<f64>| (x[0] - 2.0).powi(2) + (x[1] - 3.0).powi(2);
//! let mut optimizer = NelderMead::new(MultiDimFn::new(bowl));
//! let result = optimizer.minimize(array![0.0, 0.0]).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.xmin[0] - 2.0).abs() < 1e-2);
//! ```

pub mod error;
pub mod minimize;
pub mod prelude;
