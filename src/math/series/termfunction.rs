use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// The r-th addend of a power-series expansion, together with the name of the
/// function the series converges to.
pub trait TermFunction {
    fn function_name(&self) -> &str;

    fn term(&self, r: usize, x: f64) -> f64;
}


/// r! evaluated in floating point. Overflows to infinity past 170!.
pub fn factorial(r: usize) -> f64 {
    (1..=r).fold(1.0, |acc, k| acc * k as f64)
}

fn alternating_sign(r: usize) -> f64 {
    if r % 2 == 0 { 1.0 } else { -1.0 }
}

fn power(x: f64, n: usize) -> f64 {
    x.powi(n as i32)
}


/// Maclaurin expansions with a known reference function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Exponential,
    Sine,
    Cosine,
    SineHyperbolic,
    CosineHyperbolic,
    NaturalLogOnePlus,
    ArcTangent
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 7] = [
        SeriesKind::Exponential,
        SeriesKind::Sine,
        SeriesKind::Cosine,
        SeriesKind::SineHyperbolic,
        SeriesKind::CosineHyperbolic,
        SeriesKind::NaturalLogOnePlus,
        SeriesKind::ArcTangent
    ];

    /// Key of the reference function in a `FunctionProvider`.
    pub fn reference_name(&self) -> &'static str {
        match self {
            SeriesKind::Exponential => "exp",
            SeriesKind::Sine => "sin",
            SeriesKind::Cosine => "cos",
            SeriesKind::SineHyperbolic => "sinh",
            SeriesKind::CosineHyperbolic => "cosh",
            SeriesKind::NaturalLogOnePlus => "ln_1p",
            SeriesKind::ArcTangent => "atan"
        }
    }

    pub fn parse(name: &str) -> Option<SeriesKind> {
        SeriesKind::ALL
            .into_iter()
            .find(|kind| kind.reference_name() == name)
    }
}

impl TermFunction for SeriesKind {
    fn function_name(&self) -> &str {
        self.reference_name()
    }

    fn term(&self, r: usize, x: f64) -> f64 {
        match self {
            SeriesKind::Exponential => power(x, r) / factorial(r),
            SeriesKind::Sine => {
                let n = 2 * r + 1;
                alternating_sign(r) * power(x, n) / factorial(n)
            },
            SeriesKind::Cosine => {
                let n = 2 * r;
                alternating_sign(r) * power(x, n) / factorial(n)
            },
            SeriesKind::SineHyperbolic => {
                let n = 2 * r + 1;
                power(x, n) / factorial(n)
            },
            SeriesKind::CosineHyperbolic => {
                let n = 2 * r;
                power(x, n) / factorial(n)
            },
            // Converges only for -1 < x <= 1.
            SeriesKind::NaturalLogOnePlus => {
                let n = r + 1;
                alternating_sign(r) * power(x, n) / n as f64
            },
            SeriesKind::ArcTangent => {
                let n = 2 * r + 1;
                alternating_sign(r) * power(x, n) / n as f64
            }
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference_name())
    }
}


/// An ad-hoc term generator, for series the `SeriesKind` enum does not cover.
#[derive(Clone)]
pub struct NamedTermFunction {
    name: String,
    term_fn: fn(usize, f64) -> f64
}

impl NamedTermFunction {
    pub fn new(name: &str, term_fn: fn(usize, f64) -> f64) -> NamedTermFunction {
        NamedTermFunction { name: name.to_owned(), term_fn }
    }
}

impl TermFunction for NamedTermFunction {
    fn function_name(&self) -> &str {
        &self.name
    }

    fn term(&self, r: usize, x: f64) -> f64 {
        (self.term_fn)(r, x)
    }
}
