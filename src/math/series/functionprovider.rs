use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;

use crate::manager::manager::IManager;

pub type RealFunction = fn(f64) -> f64;

/// Source of trusted reference values, looked up by function name.
pub trait FunctionProvider {
    fn has_function(&self, name: &str) -> bool;

    /// `None` when `name` is not registered.
    fn call(&self, name: &str, x: f64) -> Option<f64>;
}


/// The standard library's real functions under their conventional short names.
pub struct StandardFunctionProvider {
    map_cell: RefCell<HashMap<String, RealFunction>>
}

impl StandardFunctionProvider {
    pub fn new() -> StandardFunctionProvider {
        let provider = StandardFunctionProvider::empty();
        let standard: [(&str, RealFunction); 11] = [
            ("exp", f64::exp),
            ("sin", f64::sin),
            ("cos", f64::cos),
            ("tan", f64::tan),
            ("sinh", f64::sinh),
            ("cosh", f64::cosh),
            ("tanh", f64::tanh),
            ("ln", f64::ln),
            ("ln_1p", f64::ln_1p),
            ("atan", f64::atan),
            ("sqrt", f64::sqrt)
        ];
        for (name, function) in standard {
            provider.insert(name, function);
        }
        provider
    }

    pub fn empty() -> StandardFunctionProvider {
        StandardFunctionProvider { map_cell: RefCell::new(HashMap::new()) }
    }

    pub fn register(&self, name: &str, function: RealFunction) {
        self.insert(name, function);
    }
}

impl Default for StandardFunctionProvider {
    fn default() -> Self {
        StandardFunctionProvider::new()
    }
}

impl IManager<RealFunction> for StandardFunctionProvider {
    fn map(&self) -> RefMut<'_, HashMap<String, RealFunction>> {
        self.map_cell.borrow_mut()
    }
}

impl FunctionProvider for StandardFunctionProvider {
    fn has_function(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn call(&self, name: &str, x: f64) -> Option<f64> {
        self.get(name).ok().map(|function| function(x))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::series::termfunction::SeriesKind;

    #[test]
    fn test_every_series_kind_has_a_reference() {
        let provider = StandardFunctionProvider::new();
        for kind in SeriesKind::ALL {
            assert!(provider.has_function(kind.reference_name()), "{kind}");
        }
    }

    #[test]
    fn test_call_matches_std() {
        let provider = StandardFunctionProvider::new();
        assert_eq!(provider.call("exp", 1.0), Some(std::f64::consts::E));
        assert_eq!(provider.call("cosh", 0.3), Some(0.3f64.cosh()));
    }

    #[test]
    fn test_unknown_name() {
        let provider = StandardFunctionProvider::new();
        assert!(!provider.has_function("gamma"));
        assert_eq!(provider.call("gamma", 1.0), None);
    }

    #[test]
    fn test_register_custom_function() {
        let provider = StandardFunctionProvider::empty();
        assert!(!provider.has_function("geometric"));
        provider.register("geometric", |x| 1.0 / (1.0 - x));
        assert_eq!(provider.call("geometric", 0.5), Some(2.0));
    }
}
