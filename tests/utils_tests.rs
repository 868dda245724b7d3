//! Integration tests for the utility modules

use approx::assert_abs_diff_eq;

use coordkit::utils::logger::Logger;
use coordkit::utils::{degree_size, parse_extents, Extents};
use coordkit::CrsError;

#[test]
fn test_degree_size_matches_published_lengths() {
    // Since there are various methods to calculate the length of a degree
    // and constants used in those methods may vary slightly, the results
    // are allowed a full meter of tolerance against the reference values.
    let tolerance = 1.0;

    let expected = [
        (0.0, 111_319.491, 110_574.304),
        (15.0, 107_550.397, 110_648.721),
        (30.0, 96_485.974, 110_852.457),
        (45.0, 78_846.335, 111_131.778),
        (60.0, 55_799.47, 111_412.273),
        (75.0, 28_901.664, 111_618.359),
    ];

    for (lat, lon_len, lat_len) in expected {
        let (lon_size, lat_size) = degree_size(lat);
        assert_abs_diff_eq!(lon_size, lon_len, epsilon = tolerance);
        assert_abs_diff_eq!(lat_size, lat_len, epsilon = tolerance);
    }
}

#[test]
fn test_parse_extents() {
    let extents = parse_extents("([0, 10], [5, 15], [-2, 2])").unwrap();
    assert_eq!(extents.min_x, 0.0);
    assert_eq!(extents.max_x, 10.0);
    assert_eq!(extents.min_y, 5.0);
    assert_eq!(extents.max_y, 15.0);
    assert_eq!(extents.min_z, -2.0);
    assert_eq!(extents.max_z, 2.0);

    // Spaces after the commas are optional
    let compact = parse_extents("([0,10],[5,15],[-2,2])").unwrap();
    assert_eq!(compact, extents);
}

#[test]
fn test_parse_extents_with_nan_vertical_bounds() {
    let extents = parse_extents("([1.5, 2.5], [-1e2, 1e2], [nan, NaN])").unwrap();
    assert_eq!(extents.min_x, 1.5);
    assert_eq!(extents.max_y, 100.0);
    assert!(extents.min_z.is_nan());
    assert!(extents.max_z.is_nan());
}

#[test]
fn test_malformed_extents_are_rejected() {
    assert!(matches!(
        parse_extents("([1, 2], [3, 4])"),
        Err(CrsError::Parse(_))
    ));
    assert!(matches!(
        parse_extents("([1, 2], [3, 4], [nan, 5]) trailing"),
        Err(CrsError::Parse(_))
    ));
    assert!(matches!(
        parse_extents("([one, 2], [3, 4], [5, 6])"),
        Err(CrsError::Parse(_))
    ));
}

#[test]
fn test_extents_round_trip_through_display() {
    let extents = Extents::new(-1.5, 2.5, 0.0, 10.0, -3.0, 3.0);
    let reparsed = parse_extents(&extents.to_string()).unwrap();
    assert_eq!(extents, reparsed);

    // NaN bounds survive the round trip even though they never compare equal
    let with_nan = Extents::new(0.0, 1.0, 0.0, 1.0, f64::NAN, f64::NAN);
    let reparsed = parse_extents(&with_nan.to_string()).unwrap();
    assert_eq!(reparsed.min_x, 0.0);
    assert!(reparsed.min_z.is_nan());
    assert!(reparsed.max_z.is_nan());
}

#[test]
fn test_extents_accessors() {
    let extents = Extents::new(0.0, 10.0, 0.0, 20.0, 0.0, 30.0);
    assert_eq!(extents.min(), [0.0, 0.0, 0.0]);
    assert_eq!(extents.max(), [10.0, 20.0, 30.0]);
    assert_eq!(extents.center(), [5.0, 10.0, 15.0]);
}

#[test]
fn test_logger_writes_messages() {
    let log_path = std::env::temp_dir().join("coordkit-utils-test.log");
    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();

    logger.log("conversion started").unwrap();
    logger.print_conversion_summary("GDC", "UTM 31N", 3).unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("conversion started"));
    assert!(contents.contains("Points: 3"));
}
