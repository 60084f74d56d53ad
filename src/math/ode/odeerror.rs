use thiserror::Error;

#[derive(Error, Debug)]
pub enum OdeError {
    #[error("integration failed on [{t_from}, {t_to}]: {reason}")]
    IntegrationFailed {
        t_from: f64,
        t_to: f64,
        reason: String
    },
    #[error("integrator returned no state at t = {0}")]
    MissingState(f64),
    #[error("tolerances must be positive and finite (rtol = {rtol}, atol = {atol})")]
    InvalidTolerance {
        rtol: f64,
        atol: f64
    }
}
