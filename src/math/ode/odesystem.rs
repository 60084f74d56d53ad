use nalgebra::SVector;

/// An autonomous or time-dependent first-order system y' = f(t, y).
pub trait OdeSystem<const N: usize> {
    fn derivative(&self, t: f64, y: &SVector<f64, N>) -> SVector<f64, N>;
}


/// Sampled solution of an initial-value problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<const N: usize> {
    times: Vec<f64>,
    states: Vec<SVector<f64, N>>
}

impl<const N: usize> Trajectory<N> {
    pub fn new(times: Vec<f64>, states: Vec<SVector<f64, N>>) -> Trajectory<N> {
        debug_assert_eq!(times.len(), states.len());
        Trajectory { times, states }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[SVector<f64, N>] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn last(&self) -> Option<(f64, &SVector<f64, N>)> {
        self.times.last().copied().zip(self.states.last())
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &SVector<f64, N>)> {
        self.times.iter().copied().zip(self.states.iter())
    }
}
