use approx::assert_relative_eq;
use pointgraph::core::{Bin, BinSeries, Point, approximate_count};

fn scenario_bins() -> Vec<Bin> {
    vec![
        Bin::new(0.0, 20.0, 0.0).expect("bin"),
        Bin::new(20.0, 40.0, 30.0).expect("bin"),
        Bin::new(40.0, 60.0, 50.0).expect("bin"),
    ]
}

#[test]
fn full_span_returns_exact_total() {
    let bins = scenario_bins();
    assert_eq!(approximate_count(&bins, 0.0, 60.0), 80.0);
    assert_eq!(approximate_count(&bins, -100.0, 100.0), 80.0);
}

#[test]
fn partial_bin_is_proportional() {
    let bins = [Bin::new(0.0, 100.0, 50.0).expect("bin")];
    assert_eq!(approximate_count(&bins, 0.0, 50.0), 25.0);
}

#[test]
fn disjoint_query_returns_zero() {
    let bins = scenario_bins();
    assert_eq!(approximate_count(&bins, 70.0, 90.0), 0.0);
    assert_eq!(approximate_count(&bins, -30.0, -1.0), 0.0);
}

#[test]
fn inverted_query_returns_zero() {
    let bins = scenario_bins();
    assert_eq!(approximate_count(&bins, 50.0, 10.0), 0.0);
}

#[test]
fn end_to_end_scenario_counts_fifty_five() {
    let series = BinSeries::new(scenario_bins()).expect("series");
    assert_relative_eq!(series.approximate_count(10.0, 50.0), 55.0);
}

#[test]
fn series_derives_knots_from_bins() {
    let series = BinSeries::new(scenario_bins()).expect("series");

    assert_eq!(
        series.knots().points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(60.0, 25.0),
        ]
    );
    let domain = series.domain();
    assert_eq!((domain.min, domain.max), (0.0, 60.0));
    assert_eq!(series.total_count(), 80.0);
}

#[test]
fn series_rejects_empty_and_unsorted_bins() {
    assert!(BinSeries::new(Vec::new()).is_err());

    let unsorted = vec![
        Bin::new(20.0, 40.0, 1.0).expect("bin"),
        Bin::new(0.0, 20.0, 1.0).expect("bin"),
    ];
    assert!(BinSeries::new(unsorted).is_err());
}

#[test]
fn bin_rejects_invalid_bounds() {
    assert!(Bin::new(5.0, 5.0, 1.0).is_err());
    assert!(Bin::new(6.0, 5.0, 1.0).is_err());
    assert!(Bin::new(0.0, f64::INFINITY, 1.0).is_err());
    assert!(Bin::new(0.0, 1.0, f64::NAN).is_err());
}
