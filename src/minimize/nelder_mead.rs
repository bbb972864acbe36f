use crate::{
    error::MinimizerError,
    minimize::{ObjFn, Vertex},
};
use ndarray::prelude::*;
use std::cmp::Ordering;

/// Configuration for the Nelder-Mead optimizer.
///
/// [`Default`] produces the standard coefficient set: reflection 1.0,
/// expansion 2.0, contraction 0.5, shrink 0.5, with a simplex step of 0.1,
/// a tolerance of 1e-6, and a budget of 1000 iterations. The record is
/// read-only for the duration of a run.
#[derive(Debug, Clone)]
pub struct NelderMeadOptions {
    step: f64,
    tolerance: f64,
    max_iterations: usize,
    alpha: f64, // Reflection coefficient
    gamma: f64, // Expansion coefficient
    beta: f64,  // Contraction coefficient
    sigma: f64, // Shrink coefficient
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            step: 0.1,
            tolerance: 1e-6,
            max_iterations: 1000,
            alpha: 1.0,
            gamma: 2.0,
            beta: 0.5,
            sigma: 0.5,
        }
    }
}

impl NelderMeadOptions {
    /// Offset applied to one coordinate per vertex when building the
    /// initial simplex. Must be nonzero so no two vertices coincide.
    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    /// Convergence threshold on the value spread of the simplex.
    pub fn set_tolerance(&mut self, tol: f64) {
        self.tolerance = tol;
    }

    pub fn set_max_iterations(&mut self, iters: usize) {
        self.max_iterations = iters;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        self.gamma = gamma;
    }

    pub fn set_beta(&mut self, beta: f64) {
        self.beta = beta;
    }

    pub fn set_sigma(&mut self, sigma: f64) {
        self.sigma = sigma;
    }

    fn validate(&self) -> Result<(), MinimizerError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MinimizerError::InvalidTolerance);
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(MinimizerError::InvalidParameters(
                "reflection coefficient alpha must be positive and finite".to_string(),
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(MinimizerError::InvalidParameters(
                "expansion coefficient gamma must exceed 1 and be finite".to_string(),
            ));
        }
        if !self.beta.is_finite() || self.beta <= 0.0 || self.beta >= 1.0 {
            return Err(MinimizerError::InvalidParameters(
                "contraction coefficient beta must lie in (0, 1)".to_string(),
            ));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 || self.sigma >= 1.0 {
            return Err(MinimizerError::InvalidParameters(
                "shrink coefficient sigma must lie in (0, 1)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of Nelder-Mead optimization
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    pub xmin: Array1<f64>,
    pub fmin: f64,
    pub iters: usize,
    pub fn_evals: usize,
    pub converged: bool,
    /// Best value at the start of each loop pass, final state included;
    /// always `iters + 1` entries.
    pub history: Array1<f64>,
}

/// Nelder-Mead downhill simplex optimizer.
///
/// Maintains a simplex of `n + 1` vertices in `n` dimensions and moves it
/// toward lower function values through reflection, expansion, contraction,
/// and shrinking. The objective is a black box: only point evaluations are
/// required, no derivatives.
#[derive(Clone)]
pub struct NelderMead {
    f: Box<dyn ObjFn>,
    xmin: Array1<f64>,
    fmin: f64,
    iters: usize,
    converged: bool,
}

impl NelderMead {
    pub fn new<F>(f: F) -> Self
    where
        F: ObjFn + 'static,
    {
        Self::new_boxed(Box::new(f))
    }

    pub fn new_boxed(f: Box<dyn ObjFn>) -> Self {
        NelderMead {
            f,
            xmin: array![],
            fmin: 0.0,
            iters: 0,
            converged: false,
        }
    }

    /// Best point found by the most recent run.
    pub fn xmin(&self) -> &Array1<f64> {
        &self.xmin
    }

    /// Objective value at [`Self::xmin`].
    pub fn fmin(&self) -> f64 {
        self.fmin
    }

    pub fn iterations(&self) -> usize {
        self.iters
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Minimize starting from `initial_point` with default options.
    pub fn minimize(
        &mut self,
        initial_point: Array1<f64>,
    ) -> Result<NelderMeadResult, MinimizerError> {
        self.minimize_opt(initial_point, &NelderMeadOptions::default())
    }

    /// Minimize starting from `initial_point` with the supplied options.
    ///
    /// The initial simplex places vertex 0 at `initial_point` and offsets
    /// one coordinate per remaining vertex by the configured step. Each
    /// iteration applies exactly one simplex transformation (shrink may
    /// follow a failed contraction), with the convergence test evaluated
    /// before any transformation so a collapsed simplex stops without
    /// spending further evaluations.
    ///
    /// # Arguments
    /// * `initial_point` - Starting point, length defines the dimensionality
    /// * `options` - Coefficients, tolerance, and iteration budget
    ///
    /// # Returns
    /// * `NelderMeadResult` with the best vertex and convergence information.
    ///   Exhausting the iteration budget is a normal outcome reported via
    ///   `converged: false`, not an error.
    ///
    /// # Errors
    /// * `InvalidDimension`, `InvalidStepSize`, `InvalidTolerance`, or
    ///   `InvalidParameters` for malformed input, detected before the first
    ///   objective call
    /// * `FunctionEvaluationError` if the objective returns NaN or infinity
    pub fn minimize_opt(
        &mut self,
        initial_point: Array1<f64>,
        options: &NelderMeadOptions,
    ) -> Result<NelderMeadResult, MinimizerError> {
        let steps = Array1::from_elem(initial_point.len(), options.step);
        self.run(initial_point, steps, options)
    }

    /// Minimize with a separate initial-simplex step per coordinate, for
    /// objectives whose variables live on different scales.
    pub fn minimize_with_steps(
        &mut self,
        initial_point: Array1<f64>,
        steps: Array1<f64>,
    ) -> Result<NelderMeadResult, MinimizerError> {
        self.run(initial_point, steps, &NelderMeadOptions::default())
    }

    fn run(
        &mut self,
        initial_point: Array1<f64>,
        steps: Array1<f64>,
        options: &NelderMeadOptions,
    ) -> Result<NelderMeadResult, MinimizerError> {
        let n = initial_point.len();
        if n == 0 {
            return Err(MinimizerError::InvalidDimension);
        }
        if steps.len() != n || steps.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(MinimizerError::InvalidStepSize);
        }
        options.validate()?;

        // Initialize simplex with n+1 vertices: the initial point plus one
        // vertex per coordinate offset
        let mut simplex = Vec::with_capacity(n + 1);
        simplex.push(Vertex::new(initial_point.clone(), self.f.as_ref())?);
        for i in 0..n {
            let mut point = initial_point.clone();
            point[i] += steps[i];
            simplex.push(Vertex::new(point, self.f.as_ref())?);
        }

        let mut fn_evals = n + 1;
        let mut iters = 0;
        let mut converged = false;
        let mut history = Vec::new();

        loop {
            // Sort vertices by function value, best first. The sort is
            // stable, so equal values keep their slot order and runs stay
            // deterministic.
            simplex.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
            history.push(simplex[0].value);

            let spread = simplex[1..]
                .iter()
                .map(|v| (v.value - simplex[0].value).abs())
                .fold(0.0_f64, f64::max);
            if spread < options.tolerance {
                converged = true;
                break;
            }
            if iters >= options.max_iterations {
                break;
            }
            iters += 1;

            let f_best = simplex[0].value;
            let f_second_worst = simplex[n - 1].value;
            let f_worst = simplex[n].value;

            // Centroid of all vertices except the worst, recomputed from
            // current simplex state every pass
            let centroid = Self::centroid(&simplex[..n]);
            let worst_point = simplex[n].point.clone();

            // Reflection
            let reflected = Vertex::new(
                Self::step_from(&centroid, &worst_point, options.alpha),
                self.f.as_ref(),
            )?;
            fn_evals += 1;

            if reflected.value < f_best {
                // Try expansion, keep the better of the two candidates
                let expanded = Vertex::new(
                    Self::step_from(&centroid, &worst_point, options.alpha * options.gamma),
                    self.f.as_ref(),
                )?;
                fn_evals += 1;
                simplex[n] = if expanded.value < reflected.value {
                    expanded
                } else {
                    reflected
                };
            } else if reflected.value < f_second_worst {
                // Accept reflection
                simplex[n] = reflected;
            } else if reflected.value < f_worst {
                // Outside contraction toward the reflected point
                let contracted = Vertex::new(
                    Self::step_from(&centroid, &worst_point, options.alpha * options.beta),
                    self.f.as_ref(),
                )?;
                fn_evals += 1;
                if contracted.value <= reflected.value {
                    simplex[n] = contracted;
                } else {
                    fn_evals += self.shrink(&mut simplex, options.sigma)?;
                }
            } else {
                // Inside contraction toward the worst vertex
                let contracted = Vertex::new(
                    Self::step_from(&centroid, &worst_point, -options.beta),
                    self.f.as_ref(),
                )?;
                fn_evals += 1;
                if contracted.value < f_worst {
                    simplex[n] = contracted;
                } else {
                    fn_evals += self.shrink(&mut simplex, options.sigma)?;
                }
            }
        }

        self.xmin = simplex[0].point.clone();
        self.fmin = simplex[0].value;
        self.iters = iters;
        self.converged = converged;

        Ok(NelderMeadResult {
            xmin: self.xmin.clone(),
            fmin: self.fmin,
            iters,
            fn_evals,
            converged,
            history: Array1::from_vec(history),
        })
    }

    /// Move every vertex except the best toward the best point,
    /// re-evaluating each. Returns the number of evaluations spent.
    fn shrink(&self, simplex: &mut [Vertex], sigma: f64) -> Result<usize, MinimizerError> {
        let best_point = simplex[0].point.clone();
        let moved = simplex.len() - 1;
        for vertex in &mut simplex[1..] {
            let point = &best_point + (&vertex.point - &best_point) * sigma;
            *vertex = Vertex::new(point, self.f.as_ref())?;
        }
        Ok(moved)
    }

    fn centroid(vertices: &[Vertex]) -> Array1<f64> {
        let mut centroid = Array1::zeros(vertices[0].point.len());
        for vertex in vertices {
            centroid += &vertex.point;
        }
        centroid / vertices.len() as f64
    }

    // All four transformations are steps along the centroid-to-worst axis:
    // reflection uses alpha, expansion alpha * gamma, outside contraction
    // alpha * beta, inside contraction -beta.
    fn step_from(centroid: &Array1<f64>, target: &Array1<f64>, coeff: f64) -> Array1<f64> {
        centroid + (centroid - target) * coeff
    }
}
