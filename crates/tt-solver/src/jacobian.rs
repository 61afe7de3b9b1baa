//! Finite difference Jacobian computation.

use crate::error::SolverResult;
use nalgebra::{DMatrix, DVector};

/// Compute Jacobian using forward finite differences.
///
/// For each column j, perturbs x[j] by epsilon and computes (f(x+e) - f(x))/epsilon.
pub fn finite_difference_jacobian<F>(
    x: &DVector<f64>,
    mut f: F,
    epsilon: f64,
) -> SolverResult<DMatrix<f64>>
where
    F: FnMut(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    let n = x.len();
    let f_x = f(x)?;
    let m = f_x.len();

    let mut jac = DMatrix::zeros(m, n);

    for j in 0..n {
        let mut x_perturbed = x.clone();
        let dx = epsilon * x[j].abs().max(1.0);
        x_perturbed[j] += dx;

        let f_perturbed = f(&x_perturbed)?;
        jac.set_column(j, &((f_perturbed - &f_x) / dx));
    }

    Ok(jac)
}

/// Compute Jacobian using central finite differences (more accurate but 2x cost).
pub fn central_difference_jacobian<F>(
    x: &DVector<f64>,
    mut f: F,
    epsilon: f64,
) -> SolverResult<DMatrix<f64>>
where
    F: FnMut(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    let n = x.len();
    let mut jac: Option<DMatrix<f64>> = None;

    for j in 0..n {
        let dx = epsilon * x[j].abs().max(1.0);

        let mut x_plus = x.clone();
        x_plus[j] += dx;
        let f_plus = f(&x_plus)?;

        let mut x_minus = x.clone();
        x_minus[j] -= dx;
        let f_minus = f(&x_minus)?;

        let df = (f_plus - f_minus) / (2.0 * dx);
        jac.get_or_insert_with(|| DMatrix::zeros(df.len(), n))
            .set_column(j, &df);
    }

    match jac {
        Some(jac) => Ok(jac),
        None => Ok(DMatrix::zeros(f(x)?.len(), 0)),
    }
}
