//! Integration tests for batch conversion between coordinate systems

use approx::assert_abs_diff_eq;

use coordkit::{
    set_active_ellipsoid, CoordinateConverter, Crs, CrsError, Ellipsoid, PointBatch, Utm,
};
use coordkit::utils::degree_size;

const METER_TOLERANCE: f64 = 0.1;
const DEGREE_TOLERANCE: f64 = 0.000001;

/// Converts a single point between two CRS descriptions
fn convert_one(from: &str, to: &str, point: [f64; 3]) -> [f64; 3] {
    let from_crs = Crs::from_str_or_raw(from).unwrap();
    let to_crs = Crs::from_str_or_raw(to).unwrap();
    let converter = CoordinateConverter::new(&from_crs, &to_crs).unwrap();

    let converted = converter
        .convert(&PointBatch::from_points(vec![point]))
        .unwrap();
    assert_eq!(converted.shape(), (1, 3));

    let row = converted.row(0);
    [row[0], row[1], row[2]]
}

fn assert_point_eq(actual: [f64; 3], expected: [f64; 3], epsilon: f64) {
    for axis in 0..3 {
        assert_abs_diff_eq!(actual[axis], expected[axis], epsilon = epsilon);
    }
}

#[test]
fn test_non_3d_batches_are_rejected() {
    let from = Crs::from_str_or_raw("GDC").unwrap();
    let to = Crs::from_str_or_raw("GCC").unwrap();
    let converter = CoordinateConverter::new(&from, &to).unwrap();

    let wide = PointBatch::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]])
        .unwrap();
    match converter.convert(&wide) {
        Err(CrsError::Shape { rows, cols }) => {
            assert_eq!(rows, 2);
            assert_eq!(cols, 4);
        }
        other => panic!("expected a shape error, got {:?}", other.map(|b| b.shape())),
    }

    let narrow = PointBatch::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
    assert!(matches!(
        converter.convert(&narrow),
        Err(CrsError::Shape { rows: 2, cols: 1 })
    ));
}

#[test]
fn test_ragged_rows_are_rejected() {
    assert!(matches!(
        PointBatch::from_rows(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]),
        Err(CrsError::Parse(_))
    ));
    assert!(matches!(
        PointBatch::from_rows(vec![vec![]]),
        Err(CrsError::Parse(_))
    ));
}

#[test]
fn test_empty_batches_convert_to_empty_batches() {
    let from = Crs::from_str_or_raw("GDC").unwrap();
    let to = Crs::from_str_or_raw("GCC").unwrap();
    let converter = CoordinateConverter::new(&from, &to).unwrap();

    let empty = PointBatch::from_rows(vec![]).unwrap();
    let converted = converter.convert(&empty).unwrap();
    assert_eq!(converted.shape(), (0, 3));
}

#[test]
fn test_self_conversion_is_identity_for_every_variant() {
    let cases = [
        ("GDC", [2.2945, 48.8584, 100.0]),
        ("GCC", [4_201_000.0, 168_000.0, 4_780_100.0]),
        ("UTM 31N", [448_250.0, 5_411_950.0, 35.0]),
        ("ENU -77.5 38.9 100", [10.0, 20.0, 5.0]),
        ("+proj=utm +zone=31 +ellps=WGS84", [448_250.0, 5_411_950.0, 35.0]),
    ];

    for (definition, point) in cases {
        let converted = convert_one(definition, definition, point);
        assert_point_eq(converted, point, 1e-6);
    }
}

#[test]
fn test_round_trips_for_every_ordered_variant_pair() {
    let systems = [
        "GDC",
        "GCC",
        "UTM 31N",
        "ENU 2.2945 48.8584 35",
        "ENU 2.3 48.9 10",
        "+proj=utm +zone=31 +ellps=WGS84",
    ];
    let base = [2.2945, 48.8584, 100.0];

    for from in systems {
        let sample = convert_one("GDC", from, base);
        for to in systems {
            let there = convert_one(from, to, sample);
            let back = convert_one(to, from, there);
            for axis in 0..3 {
                assert_abs_diff_eq!(back[axis], sample[axis], epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn test_enu_and_geodetic_axis_order() {
    // An eastward step converts to a longitude change and a northward step
    // to a latitude change, not the other way around.
    let (lon_size, lat_size) = degree_size(0.0);

    let eastern = convert_one("ENU 0 0 0", "GDC", [lon_size / 100.0, 0.0, 0.0]);
    assert_abs_diff_eq!(eastern[0], 0.01, epsilon = DEGREE_TOLERANCE);
    assert_abs_diff_eq!(eastern[1], 0.0, epsilon = DEGREE_TOLERANCE);

    let northern = convert_one("ENU 0 0 0", "GDC", [0.0, lat_size / 100.0, 0.0]);
    assert_abs_diff_eq!(northern[0], 0.0, epsilon = DEGREE_TOLERANCE);
    assert_abs_diff_eq!(northern[1], 0.01, epsilon = DEGREE_TOLERANCE);

    let eastern = convert_one("GDC", "ENU 0 0 0", [0.01, 0.0, 0.0]);
    assert_abs_diff_eq!(eastern[0], lon_size / 100.0, epsilon = METER_TOLERANCE);
    assert_abs_diff_eq!(eastern[1], 0.0, epsilon = METER_TOLERANCE);

    let northern = convert_one("GDC", "ENU 0 0 0", [0.0, 0.01, 0.0]);
    assert_abs_diff_eq!(northern[0], 0.0, epsilon = METER_TOLERANCE);
    assert_abs_diff_eq!(northern[1], lat_size / 100.0, epsilon = METER_TOLERANCE);
}

#[test]
fn test_offsets_translate_at_the_conversion_boundary() {
    // Source offset is added before the chain runs
    let converted = convert_one("GDC 1 2 3", "GDC", [0.0, 0.0, 0.0]);
    assert_point_eq(converted, [1.0, 2.0, 3.0], 1e-12);

    // Target offset is subtracted after the chain runs
    let converted = convert_one("GDC", "GDC 1 2 3", [5.0, 5.0, 5.0]);
    assert_point_eq(converted, [4.0, 3.0, 2.0], 1e-12);

    let converted = convert_one("UTM 31N", "UTM 31N 10 20 30", [500_000.0, 0.0, 0.0]);
    assert_point_eq(converted, [499_990.0, -20.0, -30.0], 1e-12);

    // An offset tangent plane behaves like shifting the input points
    let offset = convert_one("ENU 0 0 0 100 200 300", "GCC", [0.0, 0.0, 0.0]);
    let shifted = convert_one("ENU 0 0 0", "GCC", [100.0, 200.0, 300.0]);
    assert_point_eq(offset, shifted, 1e-9);
}

#[test]
fn test_geocentric_anchor_points() {
    // The equator on the prime meridian sits on the semimajor axis
    let converted = convert_one("GDC", "GCC", [0.0, 0.0, 0.0]);
    assert_point_eq(converted, [6_378_137.0, 0.0, 0.0], 1e-6);

    // The north pole sits on the semiminor axis
    let converted = convert_one("GDC", "GCC", [0.0, 90.0, 0.0]);
    assert_abs_diff_eq!(converted[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(converted[1], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(converted[2], 6_356_752.3142, epsilon = 1e-3);
}

#[test]
fn test_utm_central_meridian_anchor_points() {
    // On the central meridian of zone 31 at the equator the projection
    // reduces to the false easting
    let converted = convert_one("GDC", "UTM 31N", [3.0, 0.0, 12.5]);
    assert_point_eq(converted, [500_000.0, 0.0, 12.5], 1e-6);

    // The southern variant only adds the false northing; the C band letter
    // is below M and selects the southern hemisphere
    let converted = convert_one("GDC", "UTM 31C", [3.0, 0.0, 12.5]);
    assert_point_eq(converted, [500_000.0, 10_000_000.0, 12.5], 1e-6);

    // East of the central meridian eastings grow past 500 km
    let converted = convert_one("GDC", "UTM 31N", [4.0, 45.0, 0.0]);
    assert!(converted[0] > 500_000.0);
    assert!(converted[1] > 0.0);
}

#[test]
fn test_southern_hemisphere_round_trip() {
    let south = Crs::Utm(Utm::new(33, true));
    let gdc = Crs::from_str_or_raw("GDC").unwrap();

    let to_geodetic = CoordinateConverter::new(&south, &gdc).unwrap();
    let to_utm = CoordinateConverter::new(&gdc, &south).unwrap();

    let start = [450_000.0, 6_200_000.0, 50.0];
    let geodetic = to_geodetic
        .convert(&PointBatch::from_points(vec![start]))
        .unwrap();
    assert!(geodetic.row(0)[1] < 0.0, "point should be south of the equator");

    let back = to_utm.convert(&geodetic).unwrap();
    assert_point_eq(
        [back.row(0)[0], back.row(0)[1], back.row(0)[2]],
        start,
        1e-4,
    );
}

#[test]
fn test_tangent_plane_origin_lands_on_its_geodetic_origin() {
    // The ENU origin converts to the plane's geodetic origin, so the chain
    // through UTM must agree with projecting the origin directly
    let through_plane = convert_one("ENU 3 45 0", "UTM 31N", [0.0, 0.0, 0.0]);
    let direct = convert_one("GDC", "UTM 31N", [3.0, 45.0, 0.0]);
    assert_point_eq(through_plane, direct, 1e-3);

    let origin = convert_one("ENU -77.5 38.9 100", "GDC", [0.0, 0.0, 0.0]);
    assert_abs_diff_eq!(origin[0], -77.5, epsilon = DEGREE_TOLERANCE);
    assert_abs_diff_eq!(origin[1], 38.9, epsilon = DEGREE_TOLERANCE);
    assert_abs_diff_eq!(origin[2], 100.0, epsilon = 1e-3);
}

#[test]
fn test_utm_zone_derived_from_point_contains_the_point() {
    let utm = Utm::from_point(0.5, 10.0);
    assert_eq!(utm.zone, 31);

    // Projecting the point into its derived zone stays near the central
    // meridian easting
    let converted = convert_one("GDC", &Crs::Utm(utm).to_string(), [0.5, 10.0, 0.0]);
    assert!((converted[0] - 500_000.0).abs() < 300_000.0);
}

#[test]
fn test_non_default_ellipsoids_are_rejected() {
    let clarke = Ellipsoid::new(6_378_206.4, 294.978_698_2);
    assert!(matches!(
        set_active_ellipsoid(clarke),
        Err(CrsError::UnsupportedEllipsoid(_))
    ));
    assert!(set_active_ellipsoid(Ellipsoid::WGS84).is_ok());
    assert!(set_active_ellipsoid(Ellipsoid::default()).is_ok());

    let from = Crs::from_str_or_raw("GDC").unwrap();
    let to = Crs::from_str_or_raw("GCC").unwrap();
    assert!(matches!(
        CoordinateConverter::with_ellipsoid(&from, &to, clarke),
        Err(CrsError::UnsupportedEllipsoid(_))
    ));
    assert!(CoordinateConverter::with_ellipsoid(&from, &to, Ellipsoid::WGS84).is_ok());
}

#[test]
fn test_unsupported_raw_descriptors_fail_at_construction() {
    let gdc = Crs::from_str_or_raw("GDC").unwrap();

    let merc = Crs::from_str_or_raw("+proj=merc +ellps=WGS84").unwrap();
    assert!(matches!(
        CoordinateConverter::new(&gdc, &merc),
        Err(CrsError::CrsDef(_))
    ));

    let zoneless = Crs::from_str_or_raw("+proj=utm +ellps=WGS84").unwrap();
    assert!(matches!(
        CoordinateConverter::new(&gdc, &zoneless),
        Err(CrsError::CrsDef(_))
    ));

    let grs80 = Crs::from_str_or_raw("+proj=utm +zone=31 +ellps=GRS80").unwrap();
    assert!(matches!(
        CoordinateConverter::new(&gdc, &grs80),
        Err(CrsError::UnsupportedEllipsoid(_))
    ));

    // Tangent plane endpoints route through the same descriptor evaluation
    let ltp = Crs::from_str_or_raw("ENU 0 0 0").unwrap();
    assert!(matches!(
        CoordinateConverter::new(&ltp, &merc),
        Err(CrsError::CrsDef(_))
    ));
}

#[test]
fn test_input_batch_is_not_mutated() {
    let from = Crs::from_str_or_raw("GDC").unwrap();
    let to = Crs::from_str_or_raw("GCC").unwrap();
    let converter = CoordinateConverter::new(&from, &to).unwrap();

    let batch = PointBatch::from_points(vec![[1.0, 2.0, 3.0]]);
    let snapshot = batch.clone();
    let _ = converter.convert(&batch).unwrap();
    assert_eq!(batch, snapshot);
}
