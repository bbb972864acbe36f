use crate::error::MinimizerError;
use dyn_clone::DynClone;
use ndarray::prelude::*;

pub mod nelder_mead;

pub use self::nelder_mead::{NelderMead, NelderMeadOptions, NelderMeadResult};

// Define a trait for the objective function
pub trait ObjFn: DynClone {
    fn call(&self, x: &Array1<f64>) -> f64;
}
dyn_clone::clone_trait_object!(ObjFn);

impl<F> ObjFn for F
where
    F: Fn(&Array1<f64>) -> f64 + Clone,
{
    fn call(&self, x: &Array1<f64>) -> f64 {
        self(x)
    }
}

/// Wrapper for multi-dimensional functions
#[derive(Clone)]
pub struct MultiDimFn<F>(pub F)
where
    F: Fn(&Array1<f64>) -> f64 + Clone;

// Convenience constructor
impl<F> MultiDimFn<F>
where
    F: Fn(&Array1<f64>) -> f64 + Clone,
{
    pub fn new(f: F) -> Self {
        MultiDimFn(f)
    }
}

impl<F> ObjFn for MultiDimFn<F>
where
    F: Fn(&Array1<f64>) -> f64 + Clone,
{
    fn call(&self, x: &Array1<f64>) -> f64 {
        (self.0)(x)
    }
}

/// A vertex of the simplex
#[derive(Debug, Clone)]
pub(crate) struct Vertex {
    pub(crate) point: Array1<f64>,
    pub(crate) value: f64,
}

impl Vertex {
    /// Evaluates the objective at `point` and caches the value. The cached
    /// value is only replaced together with the point, never separately.
    pub(crate) fn new(point: Array1<f64>, f: &dyn ObjFn) -> Result<Self, MinimizerError> {
        let value = f.call(&point);
        if !value.is_finite() {
            return Err(MinimizerError::FunctionEvaluationError);
        }
        Ok(Vertex { point, value })
    }
}

#[cfg(test)]
mod minimize_tests {
    use super::*;

    #[test]
    fn test_objfn_closure() {
        let f = |x: &Array1<f64>| x[0] + 2.0 * x[1];
        assert_eq!(f.call(&array![1.0, 2.0]), 5.0);

        let boxed: Box<dyn ObjFn> = Box::new(f);
        let cloned = boxed.clone();
        assert_eq!(cloned.call(&array![1.0, 2.0]), 5.0);
    }

    #[test]
    fn test_multidimfn_wrapper() {
        let objective = MultiDimFn::new(|x: &Array1<f64>| x.iter().map(|&xi| xi * xi).sum());
        assert_eq!(objective.call(&array![3.0, 4.0]), 25.0);
    }

    #[test]
    fn test_vertex_caches_value() {
        let f = MultiDimFn::new(|x: &Array1<f64>| x[0] * 10.0);
        let vertex = Vertex::new(array![1.5], &f).unwrap();
        assert_eq!(vertex.value, 15.0);
        assert_eq!(vertex.point.len(), 1);
    }

    #[test]
    fn test_vertex_rejects_non_finite() {
        let f = MultiDimFn::new(|_: &Array1<f64>| f64::NAN);
        let result = Vertex::new(array![0.0], &f);
        assert!(matches!(result, Err(MinimizerError::FunctionEvaluationError)));

        let f = MultiDimFn::new(|_: &Array1<f64>| f64::INFINITY);
        let result = Vertex::new(array![0.0], &f);
        assert!(matches!(result, Err(MinimizerError::FunctionEvaluationError)));
    }
}
