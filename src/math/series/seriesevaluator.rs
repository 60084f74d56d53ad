use thiserror::Error;
use tracing::debug;

use crate::math::series::functionprovider::FunctionProvider;
use crate::math::series::termfunction::TermFunction;

/// Exclusive upper bound on the number of terms a single evaluation may sum.
pub const MAX_TERMS_CEILING: usize = 99;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("max_terms must be a positive integer below {ceiling}, got {max_terms}")]
    InvalidArgument {
        max_terms: usize,
        ceiling: usize
    },
    #[error("no reference function named '{0}'")]
    UnknownFunction(String)
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesRow {
    index: usize,
    term: f64,
    cumulative: f64,
    error: f64
}

impl SeriesRow {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn term(&self) -> f64 {
        self.term
    }

    pub fn cumulative(&self) -> f64 {
        self.cumulative
    }

    /// Signed truncation error: partial sum minus the reference value.
    pub fn error(&self) -> f64 {
        self.error
    }
}


/// Partial sums of one truncated series, compared against the true value.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesResult {
    function_name: String,
    x: f64,
    reference_value: f64,
    rows: Vec<SeriesRow>
}

impl SeriesResult {
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn reference_value(&self) -> f64 {
        self.reference_value
    }

    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row with the most terms summed.
    pub fn last(&self) -> Option<&SeriesRow> {
        self.rows.last()
    }
}


pub struct SeriesEvaluator<P: FunctionProvider> {
    provider: P
}

impl<P: FunctionProvider> SeriesEvaluator<P> {
    pub fn new(provider: P) -> SeriesEvaluator<P> {
        SeriesEvaluator { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Sums the first `max_terms` terms of `term_function` at `x`.
    ///
    /// Both the term count and the reference lookup are checked before any
    /// term is computed; a failed check returns no rows at all. Infinite or
    /// NaN terms are carried through as-is.
    pub fn evaluate(&self,
                    term_function: &dyn TermFunction,
                    x: f64,
                    max_terms: usize) -> Result<SeriesResult, SeriesError> {
        if max_terms == 0 || max_terms >= MAX_TERMS_CEILING {
            return Err(SeriesError::InvalidArgument { max_terms, ceiling: MAX_TERMS_CEILING });
        }

        let name = term_function.function_name();
        if !self.provider.has_function(name) {
            return Err(SeriesError::UnknownFunction(name.to_owned()));
        }
        let reference_value = self.provider
            .call(name, x)
            .ok_or_else(|| SeriesError::UnknownFunction(name.to_owned()))?;

        let mut cumulative = 0.0;
        let rows: Vec<SeriesRow> = (0..max_terms)
            .map(|index| {
                let term = term_function.term(index, x);
                cumulative += term;
                SeriesRow {
                    index,
                    term,
                    cumulative,
                    error: cumulative - reference_value
                }
            })
            .collect();

        debug!(
            function = name,
            x,
            max_terms,
            reference_value,
            final_error = rows.last().map_or(f64::NAN, |row| row.error),
            "evaluated truncated series"
        );

        Ok(SeriesResult {
            function_name: name.to_owned(),
            x,
            reference_value,
            rows
        })
    }
}
