use std::io::Write;

use mathnotes::configuration::Configuration;
use mathnotes::manager::manager::IManager;
use mathnotes::manager::managererror::ManagerError;
use mathnotes::math::series::functionprovider::StandardFunctionProvider;
use mathnotes::math::series::seriesevaluator::{
    SeriesError,
    SeriesEvaluator
};
use mathnotes::math::series::seriestable::SeriesTable;
use mathnotes::math::series::termfunction::{
    NamedTermFunction,
    SeriesKind
};
use mathnotes::notebook::export::write_population_csv;

#[test]
fn every_default_series_setting_evaluates() {
    let config = Configuration::default_notebooks().unwrap();
    let evaluator = SeriesEvaluator::new(StandardFunctionProvider::new());
    let manager = config.series_setting_manager();
    for name in manager.names() {
        let setting = manager.get(&name).unwrap();
        let result = setting.evaluate(&evaluator).unwrap();
        assert_eq!(result.len(), setting.max_terms(), "{name}");
        let table = SeriesTable::new(&result).to_string();
        assert_eq!(table.lines().count(), setting.max_terms() + 2, "{name}");
    }
}

#[test]
fn exp_table_matches_hand_computation() {
    let config = Configuration::default_notebooks().unwrap();
    let setting = config.series_setting_manager().get("exp_at_one").unwrap();
    let evaluator = SeriesEvaluator::new(StandardFunctionProvider::new());
    let result = setting.evaluate(&evaluator).unwrap();

    let expected_terms = [1.0, 1.0, 0.5, 1.0 / 6.0, 1.0 / 24.0, 1.0 / 120.0];
    for (row, expected) in result.rows().iter().zip(expected_terms) {
        assert!((row.term() - expected).abs() < 1e-15);
    }
    let last = result.last().unwrap();
    assert!((last.cumulative() - 2.716666666667).abs() < 1e-12);
    assert!((last.error() + 0.0016151617924).abs() < 1e-12);
}

#[test]
fn series_failures_produce_no_rows() {
    let evaluator = SeriesEvaluator::new(StandardFunctionProvider::new());
    assert!(matches!(
        evaluator.evaluate(&SeriesKind::Cosine, 1.0, 99),
        Err(SeriesError::InvalidArgument { max_terms: 99, .. })
    ));
    let unknown = NamedTermFunction::new("erf", |_, _| 0.0);
    assert_eq!(
        evaluator.evaluate(&unknown, 1.0, 10),
        Err(SeriesError::UnknownFunction("erf".to_owned()))
    );
}

#[test]
fn custom_configuration_drives_every_notebook() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", r#"{
        "series": [{"name": "s", "kind": "Sine", "x": 0.0, "max_terms": 98}],
        "spiral": [{"name": "log", "kind": "Logarithmic", "b": 0.1, "w0": 2.0,
                    "t_min": 0.0, "t_max": 3.0, "samples": 31}],
        "log_horn": [{"name": "h", "alpha_min": 0.5, "alpha_max": 4.0, "alpha_samples": 8,
                      "theta_min": 0.0, "theta_max": 3.0, "theta_samples": 4}],
        "lotka_volterra": [{"name": "p", "alpha": 1.0, "beta": 0.5, "delta": 0.2, "gamma": 0.6,
                            "prey0": 3.0, "predator0": 2.0, "t_end": 10.0, "steps": 100}]
    }"#).unwrap();

    let config = Configuration::new();
    config.from_path(file.path()).unwrap();
    assert_eq!(config.setting_names().len(), 4);

    let evaluator = SeriesEvaluator::new(StandardFunctionProvider::new());
    let sine = config.series_setting_manager().get("s").unwrap().evaluate(&evaluator).unwrap();
    assert!(sine.rows().iter().all(|row| row.cumulative() == 0.0 && row.error() == 0.0));

    let spiral = config.spiral_setting_manager().get("log").unwrap();
    let points = spiral.sample();
    assert_eq!(points.len(), 31);
    // θ = w0·t = 6 at the far end, r = e^(0.6).
    assert!((points[30].coords.norm() - 0.6f64.exp()).abs() < 1e-12);

    let mesh = config.log_horn_setting_manager().get("h").unwrap().sample();
    assert_eq!((mesh.len(), mesh[0].len()), (8, 4));

    let trajectory = config.lotka_volterra_setting_manager().get("p").unwrap().solve().unwrap();
    let mut csv = Vec::new();
    write_population_csv(&mut csv, &trajectory).unwrap();
    let text = String::from_utf8(csv).unwrap();
    assert_eq!(text.lines().count(), 102);
    assert_eq!(text.lines().nth(1), Some("0,3,2"));
}

#[test]
fn lookup_of_missing_setting_fails() {
    let config = Configuration::default_notebooks().unwrap();
    assert!(matches!(
        config.spiral_setting_manager().get("fermat"),
        Err(ManagerError::NameNotFoundError(_))
    ));
}
