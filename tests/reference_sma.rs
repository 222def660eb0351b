mod fixtures;

use fixtures::{assert_near, load_ref_values, load_reference_series};
use overlay_ta::{Series, Sma, SmaConfig};
use std::num::NonZero;

const REF_PATH: &str = "tests/fixtures/data/sma-20-close.csv";

/// SMA is pure arithmetic over a fixed window, so only representation
/// differences remain.
const TOLERANCE: f64 = 1e-6;

#[test]
fn sma_20_close_matches_reference() {
    let data = load_reference_series();
    let series = Series::new(&data.x_data, &data.y_data).expect("valid reference series");
    let reference = load_ref_values(REF_PATH);

    let sma = Sma::new(SmaConfig::close(NonZero::new(20).unwrap()));
    let output = sma.compute(&series).expect("SMA returned None");

    assert_eq!(
        output.len(),
        reference.len(),
        "row count: {} rows for {} bars",
        output.len(),
        data.x_data.len()
    );

    for (i, (row, expected)) in output.values().iter().zip(&reference).enumerate() {
        assert!(
            (row.x() - expected.x).abs() < f64::EPSILON,
            "x mismatch at row {i}: {} vs {}",
            row.x(),
            expected.x
        );
        assert_near(
            row.values()[0],
            expected.expected,
            TOLERANCE,
            &format!("SMA(20) at row {i} (x={})", row.x()),
        );
    }
}

#[test]
fn first_row_anchors_at_period_th_bar() {
    let data = load_reference_series();
    let series = Series::new(&data.x_data, &data.y_data).unwrap();

    let sma = Sma::new(SmaConfig::close(NonZero::new(20).unwrap()));
    let output = sma.compute(&series).unwrap();

    assert_eq!(output.x_data().first(), data.x_data.get(19));
    assert_eq!(output.x_data().last(), data.x_data.last());
}
