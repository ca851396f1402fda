//! Unit tests for sg-rect.
//!
//! Randomized checks draw from a fixed-seed `GeoRng`, so every run sees the
//! same inputs.

#[cfg(test)]
mod helpers {
    use sg_core::{GeoRng, LatLng};

    use crate::LatLngRect;

    pub fn ll(lat_deg: f64, lng_deg: f64) -> LatLng {
        LatLng::from_degrees(lat_deg, lng_deg)
    }

    /// Rectangle from south-west and north-east corners in degrees.
    pub fn rect(lat_lo: f64, lng_lo: f64, lat_hi: f64, lng_hi: f64) -> LatLngRect {
        LatLngRect::from_lo_hi(ll(lat_lo, lng_lo), ll(lat_hi, lng_hi), Default::default())
            .expect("test rectangle must be valid")
    }

    pub fn random_rect(rng: &mut GeoRng) -> LatLngRect {
        LatLngRect::from_point_pair(rng.random_latlng(), rng.random_latlng())
    }

    /// Grow by a rounding allowance so sampled points on the boundary count.
    pub fn loose(r: &LatLngRect) -> LatLngRect {
        r.expanded(LatLng::from_radians(1e-12, 1e-12))
    }
}

#[cfg(test)]
mod construction {
    use std::f64::consts::{FRAC_PI_2, PI};

    use sg_core::{LatLng, Point, R1Interval, S1Interval};

    use super::helpers::{ll, rect};
    use crate::{LatLngRect, RectError, Validation, Violation};

    #[test]
    fn point_pair_takes_per_axis_bounds() {
        let r = LatLngRect::from_point_pair(ll(0.0, 0.0), ll(10.0, 20.0));
        let expected = LatLngRect::new_unchecked(
            R1Interval::new(0.0, 10f64.to_radians()),
            S1Interval::new(0.0, 20f64.to_radians()),
        );
        assert!(r.approx_eq(&expected), "got {r}");
        assert!(!r.is_inverted());
    }

    #[test]
    fn empty_and_full_sentinels() {
        let e = LatLngRect::empty();
        assert!(e.is_valid() && e.is_empty() && !e.is_full());
        assert!(e.lng().is_empty());
        assert_eq!(e.area(), 0.0);
        assert_eq!(LatLngRect::default(), e);

        let f = LatLngRect::full();
        assert!(f.is_valid() && f.is_full() && !f.is_empty());
        assert_eq!(f.lat(), LatLngRect::full_lat());
        assert_eq!(f.lng(), LatLngRect::full_lng());
        assert!((f.area() - 4.0 * PI).abs() < 1e-14);
    }

    #[test]
    fn checked_construction_names_the_violation() {
        let too_far_north = LatLngRect::from_intervals(
            R1Interval::new(0.0, 2.0),
            S1Interval::new(0.0, 1.0),
            Validation::Checked,
        );
        assert!(matches!(too_far_north, Err(RectError::Invalid(Violation::LatitudeOutOfRange))));

        let half_empty = LatLngRect::from_intervals(
            R1Interval::empty(),
            S1Interval::new(0.0, 1.0),
            Validation::Checked,
        );
        assert!(matches!(half_empty, Err(RectError::Invalid(Violation::MixedEmptiness))));

        let bad_lng = LatLngRect::from_intervals(
            R1Interval::new(0.0, 1.0),
            S1Interval::new(0.0, 4.0),
            Validation::Checked,
        );
        assert!(matches!(bad_lng, Err(RectError::Invalid(Violation::InvalidLongitude))));
    }

    #[test]
    fn trusted_construction_skips_the_check() {
        let r = LatLngRect::from_intervals(
            R1Interval::new(0.0, 2.0),
            S1Interval::new(0.0, 1.0),
            Validation::Trusted,
        )
        .expect("trusted construction never fails");
        assert!(!r.is_valid());
        assert!(!r.to_builder().is_valid());
    }

    #[test]
    fn try_from_intervals_is_checked() {
        let ok = LatLngRect::try_from((R1Interval::new(-0.5, 0.5), S1Interval::new(1.0, 2.0)));
        assert!(ok.is_ok());
        let err = LatLngRect::try_from((R1Interval::new(-0.5, 0.5), S1Interval::empty()));
        assert!(matches!(err, Err(RectError::Invalid(Violation::MixedEmptiness))));
    }

    #[test]
    fn corners_and_vertices() {
        let r = rect(-10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.lo(), ll(-10.0, 20.0));
        assert_eq!(r.hi(), ll(30.0, 40.0));
        assert_eq!(r.vertex(1), ll(-10.0, 40.0));
        assert_eq!(r.vertex(3), ll(30.0, 20.0));
        assert_eq!(r.vertex(6), r.vertex(2));
        assert!((r.lat_hi().degrees() - 30.0).abs() < 1e-12);
        assert!((r.lng_lo().degrees() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn minus_180_is_stored_as_plus_180() {
        let r = rect(0.0, -180.0, 10.0, -170.0);
        assert_eq!(r.lng().lo(), PI);
        assert!(r.is_inverted());
        assert!(r.is_valid());
    }

    #[test]
    fn center_size_clamps_latitude() {
        let r = LatLngRect::from_center_size(ll(80.0, 170.0), ll(40.0, 60.0));
        assert!((r.lat().lo() - 60f64.to_radians()).abs() < 1e-14);
        assert_eq!(r.lat().hi(), FRAC_PI_2);
        assert!(r.is_inverted(), "longitude crosses the antimeridian: {r}");
        assert!((r.size().lng - 60f64.to_radians()).abs() < 1e-14);

        let whole = LatLngRect::from_center_size(ll(0.0, 0.0), ll(180.0, 360.0));
        assert!(whole.is_full());
    }

    #[test]
    fn point_rectangle() {
        let p = ll(12.5, -45.0);
        let r = LatLngRect::from_point(p);
        assert!(r.is_point());
        assert!(r.contains(p));
        assert!(!r.interior_contains(p));
        assert_eq!(r.center(), p);

        // A pole with every longitude is a polar cap, not a point.
        let pole = LatLngRect::new_unchecked(R1Interval::from_point(FRAC_PI_2), S1Interval::full());
        assert!(!pole.is_point());
        assert!(pole.contains_point(Point::new(0.0, 0.0, 5.0)));
    }

    #[test]
    fn display_shows_corners() {
        let r = LatLngRect::from_point(LatLng::from_degrees(10.0, 20.0));
        assert_eq!(r.to_string(), "[Lo=(10.000000, 20.000000), Hi=(10.000000, 20.000000)]");
    }
}

#[cfg(test)]
mod predicates {
    use sg_core::Point;

    use super::helpers::{ll, rect};
    use crate::LatLngRect;

    #[test]
    fn contains_across_antimeridian() {
        let r = rect(-10.0, 170.0, 10.0, -170.0);
        assert!(r.contains(ll(0.0, 180.0)));
        assert!(r.contains(ll(0.0, -175.0)));
        assert!(r.contains(ll(5.0, 175.0)));
        assert!(!r.contains(ll(0.0, 0.0)));
        assert!(!r.contains(ll(20.0, 180.0)));
    }

    #[test]
    fn interior_excludes_boundary() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.interior_contains(ll(5.0, 5.0)));
        assert!(!r.interior_contains(ll(0.0, 5.0)));
        assert!(r.contains(ll(0.0, 5.0)));
    }

    #[test]
    fn contains_point_accepts_unnormalized_vectors() {
        let r = rect(-10.0, -10.0, 10.0, 10.0);
        assert!(r.contains_point(Point::new(3.0, 0.0, 0.0)));
        assert!(!r.contains_point(Point::new(-3.0, 0.0, 0.0)));
    }

    #[test]
    fn rect_containment_and_intersection() {
        let outer = rect(-20.0, -20.0, 20.0, 20.0);
        let inner = rect(-5.0, -5.0, 5.0, 5.0);
        let straddle = rect(10.0, 10.0, 30.0, 30.0);
        let apart = rect(40.0, 40.0, 50.0, 50.0);

        assert!(outer.contains_rect(&inner));
        assert!(!inner.contains_rect(&outer));
        assert!(outer.intersects(&straddle));
        assert!(!outer.contains_rect(&straddle));
        assert!(!outer.intersects(&apart));
        assert!(outer.contains_rect(&LatLngRect::empty()));
        assert!(!outer.intersects(&LatLngRect::empty()));
    }

    #[test]
    fn approx_equality_tolerance() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = a.expanded(sg_core::LatLng::from_radians(1e-16, 0.0));
        assert!(a.approx_eq(&b));
        let c = a.expanded(sg_core::LatLng::from_radians(1e-6, 0.0));
        assert!(!a.approx_eq(&c));
        assert!(a.approx_equals(&c, 1e-5));
    }
}

#[cfg(test)]
mod algebra {
    use std::f64::consts::FRAC_PI_2;

    use sg_core::{GeoRng, LatLng};

    use super::helpers::{ll, random_rect, rect};
    use crate::LatLngRect;

    #[test]
    fn empty_and_full_laws() {
        assert_eq!(LatLngRect::empty().union(&LatLngRect::full()), LatLngRect::full());
        assert_eq!(LatLngRect::full().intersection(&LatLngRect::empty()), LatLngRect::empty());

        let mut rng = GeoRng::default();
        for _ in 0..200 {
            let r = random_rect(&mut rng);
            assert_eq!(LatLngRect::empty().union(&r), r);
            assert_eq!(r.union(&LatLngRect::empty()), r);
            assert!(r.intersection(&LatLngRect::empty()).is_empty());
            assert_eq!(LatLngRect::full().intersection(&r), r);
            assert!(r.union(&LatLngRect::full()).is_full());
        }
    }

    #[test]
    fn union_and_intersection_are_idempotent() {
        let mut rng = GeoRng::new(11);
        for _ in 0..200 {
            let r = random_rect(&mut rng);
            assert_eq!(r.union(&r), r);
            assert_eq!(r.intersection(&r), r);
        }
    }

    #[test]
    fn union_contains_both_operands() {
        let mut rng = GeoRng::new(12);
        for _ in 0..200 {
            let a = random_rect(&mut rng);
            let b = random_rect(&mut rng);
            let u = a.union(&b);
            assert!(u.contains_rect(&a) && u.contains_rect(&b), "{a} ∪ {b} = {u}");
            assert!(u.is_valid());
        }
    }

    #[test]
    fn disjoint_intersection_is_canonical_empty() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let lat_apart = rect(20.0, 0.0, 30.0, 10.0);
        let lng_apart = rect(0.0, 20.0, 10.0, 30.0);
        for other in [lat_apart, lng_apart] {
            let i = a.intersection(&other);
            assert_eq!(i, LatLngRect::empty());
            assert!(i.is_valid());
        }
    }

    #[test]
    fn add_point_grows_each_axis_independently() {
        let mut rng = GeoRng::new(13);
        for _ in 0..200 {
            let r = random_rect(&mut rng);
            let p = rng.random_latlng();
            let grown = r.add_point(p);
            assert!(grown.contains(p));
            assert_eq!(grown.lat(), r.lat().add_point(p.lat));
            assert_eq!(grown.lng(), r.lng().add_point(p.lng));
        }
    }

    #[test]
    fn add_point_inside_wrapped_longitude_is_a_no_op() {
        let r = rect(-10.0, 170.0, 10.0, -170.0);
        let grown = r.add_point(ll(0.0, 180.0));
        assert_eq!(grown.lng(), r.lng());
        assert_eq!(grown, r);
    }

    #[test]
    fn add_point_to_empty_gives_point() {
        let p = ll(-33.0, 151.0);
        assert_eq!(LatLngRect::empty().add_point(p), LatLngRect::from_point(p));
    }

    #[test]
    fn expanded_clamps_at_pole() {
        let r = rect(80.0, 0.0, 85.0, 0.0);
        let e = r.expanded(ll(5.0, 0.0));
        assert!((e.lat().lo() - 75f64.to_radians()).abs() < 1e-15);
        assert!((e.lat().hi() - FRAC_PI_2).abs() < 1e-15);
        assert!(e.lat().hi() <= FRAC_PI_2);
        assert_eq!(e.lng(), r.lng());
    }

    #[test]
    fn expanded_longitude_wraps_and_saturates() {
        let r = rect(0.0, 170.0, 10.0, 175.0);
        let e = r.expanded(ll(0.0, 10.0));
        assert!(e.is_inverted());
        assert!(e.contains(ll(5.0, -178.0)));

        let full = r.expanded(ll(0.0, 180.0));
        assert!(full.lng().is_full());
        assert!(LatLngRect::empty().expanded(ll(10.0, 10.0)).is_empty());
    }

    #[test]
    fn polar_closure_is_idempotent() {
        let touching = LatLngRect::from_lo_hi(
            ll(80.0, 10.0),
            LatLng::from_radians(FRAC_PI_2, 20f64.to_radians()),
            Default::default(),
        )
        .expect("valid");
        let closed = touching.polar_closure();
        assert!(closed.lng().is_full());
        assert_eq!(closed.polar_closure(), closed);

        let away = rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(away.polar_closure(), away);

        let mut rng = GeoRng::new(14);
        for _ in 0..100 {
            let r = random_rect(&mut rng).polar_closure();
            assert_eq!(r.polar_closure(), r);
        }
    }
}

#[cfg(test)]
mod distance {
    use std::f64::consts::FRAC_PI_2;

    use sg_core::{Angle, GeoRng, LatLng, R1Interval, S1Interval};

    use super::helpers::{loose, random_rect, rect};
    use crate::sample::sample_point_in_cap;
    use crate::{Cap, LatLngRect};

    #[test]
    fn grow_then_shrink_restores_rectangle() {
        let r = rect(10.0, 30.0, 20.0, 50.0);
        let d = Angle::from_degrees(1.0);
        let grown = r.expanded_by_distance(d);
        assert!(grown.contains_rect(&r));
        assert!((grown.lat().lo() - 9f64.to_radians()).abs() < 1e-12);
        assert!((grown.lat().hi() - 21f64.to_radians()).abs() < 1e-12);

        let back = grown.expanded_by_distance(-d);
        assert!(back.approx_equals(&r, 1e-10), "{back} vs {r}");
    }

    #[test]
    fn empty_and_full_are_unchanged() {
        for d in [1.0, -1.0] {
            let d = Angle::from_degrees(d);
            assert!(LatLngRect::empty().expanded_by_distance(d).is_empty());
            assert!(LatLngRect::full().expanded_by_distance(d).is_full());
        }
    }

    #[test]
    fn growth_reaching_a_pole_makes_longitude_full() {
        let r = rect(80.0, 0.0, 85.0, 10.0);
        let grown = r.expanded_by_distance(Angle::from_degrees(10.0));
        assert_eq!(grown.lat().hi(), FRAC_PI_2);
        assert!(grown.lng().is_full());
    }

    #[test]
    fn shrinking_keeps_polar_bound_with_full_longitude() {
        let r = LatLngRect::new_unchecked(
            R1Interval::new(60f64.to_radians(), FRAC_PI_2),
            S1Interval::full(),
        );
        let s = r.expanded_by_distance(Angle::from_degrees(-5.0));
        assert!((s.lat().lo() - 65f64.to_radians()).abs() < 1e-12);
        assert_eq!(s.lat().hi(), FRAC_PI_2);
        assert!(s.lng().is_full());
    }

    #[test]
    fn shrinking_past_the_width_empties() {
        let lat_collapse = rect(10.0, 30.0, 20.0, 50.0).expanded_by_distance(Angle::from_degrees(-6.0));
        assert_eq!(lat_collapse, LatLngRect::empty());

        let lng_collapse = rect(-40.0, 0.0, 40.0, 2.0).expanded_by_distance(Angle::from_degrees(-2.0));
        assert_eq!(lng_collapse, LatLngRect::empty());
        assert!(lng_collapse.is_valid());
    }

    #[test]
    fn shrunk_rect_is_contained() {
        let mut rng = GeoRng::new(21);
        for _ in 0..200 {
            let r = random_rect(&mut rng);
            let d = rng.angle_in_range(0.0, 0.2);
            let s = r.expanded_by_distance(-d);
            assert!(s.is_valid());
            assert!(r.contains_rect(&s), "{s} escapes {r}");
        }
    }

    #[test]
    fn convolution_covers_corner_caps() {
        let mut rng = GeoRng::new(22);
        for _ in 0..50 {
            let r = random_rect(&mut rng);
            let angle = rng.angle_in_range(0.0, 0.3);
            let conv = loose(&r.convolve_with_cap(angle));
            assert!(conv.contains_rect(&r));
            for k in 0..4 {
                let cap = Cap::from_axis_angle(r.vertex(k).to_point(), angle);
                for _ in 0..10 {
                    let p = sample_point_in_cap(&mut rng, &cap);
                    assert!(conv.contains_point(p), "{} outside {conv}", LatLng::from_point(p));
                }
            }
        }
    }

    #[test]
    fn convolving_empty_stays_empty() {
        assert!(LatLngRect::empty().convolve_with_cap(Angle::from_degrees(5.0)).is_empty());
    }
}

#[cfg(test)]
mod builder {
    use sg_core::{Angle, GeoRng, LatLng, R1Interval, S1Interval};

    use super::helpers::{ll, rect};
    use crate::{LatLngRect, LatLngRectBuilder, RectError, Violation};

    #[test]
    fn build_twice_gives_equal_independent_snapshots() {
        let mut b = LatLngRectBuilder::new();
        b.add_point(ll(1.0, 2.0)).add_point(ll(3.0, 4.0));
        let first = b.build();
        let second = b.build();
        assert_eq!(first, second);

        b.add_point(ll(50.0, 60.0));
        assert_eq!(first, second);
        assert!(!first.contains(ll(50.0, 60.0)));
        assert!(b.build().contains(ll(50.0, 60.0)));
    }

    #[test]
    fn matches_immutable_operations() {
        let mut rng = GeoRng::new(31);
        for _ in 0..100 {
            let p1 = rng.random_latlng();
            let p2 = rng.random_latlng();
            let d = rng.angle_in_range(-0.1, 0.1);
            let r = LatLngRect::from_point(p1).add_point(p2).expanded_by_distance(d);

            let mut b = LatLngRectBuilder::new();
            b.add_point(p1).add_point(p2).expanded_by_distance(d);
            assert_eq!(b.build(), r);
        }
    }

    #[test]
    fn intersection_fixes_up_empty_axis() {
        let mut b = LatLngRectBuilder::from_rect(&rect(0.0, 0.0, 10.0, 10.0));
        b.intersection(&rect(20.0, 0.0, 30.0, 10.0));
        assert!(b.is_empty());
        assert!(b.lng().is_empty());
        assert!(b.is_valid());
        assert_eq!(b.build(), LatLngRect::empty());
    }

    #[test]
    fn try_build_validates() {
        let mut b = LatLngRectBuilder::new();
        b.set_lat(0.0, 3.0).set_lng(0.0, 1.0);
        assert!(!b.is_valid());
        assert!(matches!(b.try_build(), Err(RectError::Invalid(Violation::LatitudeOutOfRange))));

        b.set_lat(0.0, 1.0);
        assert!(b.try_build().is_ok());

        let half = LatLngRectBuilder::from_intervals(R1Interval::new(0.0, 1.0), S1Interval::empty());
        assert!(matches!(half.try_build(), Err(RectError::Invalid(Violation::MixedEmptiness))));
    }

    #[test]
    fn setters_and_clear() {
        let mut b = LatLngRectBuilder::new();
        assert!(b.is_empty());
        b.set_full();
        assert!(b.is_full());
        b.set_lng(-std::f64::consts::PI, 0.5);
        assert_eq!(b.lng().lo(), std::f64::consts::PI);
        b.clear();
        assert_eq!(b.build(), LatLngRect::empty());
    }

    #[test]
    fn round_trip_through_builder() {
        let r = rect(-5.0, 100.0, 5.0, -100.0);
        let mut b = r.to_builder();
        assert_eq!(b.build(), r);
        b.union(&rect(0.0, 0.0, 1.0, 1.0)).polar_closure().convolve_with_cap(Angle::ZERO);
        assert!(b.build().contains_rect(&r));
        assert_eq!(LatLngRectBuilder::from(&r), r.to_builder());
    }

    #[test]
    fn corners_and_vectors() {
        let mut b = LatLngRectBuilder::from_lo_hi(ll(0.0, 0.0), ll(10.0, 10.0));
        assert_eq!(b.vertex(2), ll(10.0, 10.0));
        b.add_point_xyz(LatLng::from_degrees(-5.0, 5.0).to_point());
        assert!(b.lat().lo() < 0.0);
        b.expanded(ll(1.0, 1.0));
        assert!(b.build().contains(ll(-5.5, -0.5)));
    }
}

#[cfg(test)]
mod codec {
    use byteorder::{ByteOrder, LittleEndian};
    use sg_core::LatLng;

    use super::helpers::{ll, rect};
    use crate::{ENCODED_LEN, ENCODING_VERSION, LatLngRect, RectError, Violation};

    fn raw(version: u8, values: [f64; 4]) -> Vec<u8> {
        let mut bytes = vec![0u8; ENCODED_LEN];
        bytes[0] = version;
        for (i, v) in values.iter().enumerate() {
            LittleEndian::write_f64(&mut bytes[1 + 8 * i..9 + 8 * i], *v);
        }
        bytes
    }

    fn samples() -> [LatLngRect; 4] {
        [
            LatLngRect::empty(),
            LatLngRect::full(),
            LatLngRect::from_point(LatLng::from_degrees(47.5, -122.25)),
            rect(-10.0, 170.0, 10.0, -170.0),
        ]
    }

    #[test]
    fn full_encodes_to_fixed_buffer() {
        let bytes = LatLngRect::full().to_bytes();
        assert_eq!(bytes.len(), 33);
        assert_eq!(bytes[0], ENCODING_VERSION);
        assert_eq!(LittleEndian::read_f64(&bytes[1..9]), -std::f64::consts::FRAC_PI_2);
        assert!(LatLngRect::from_bytes(&bytes).expect("decodes").is_full());
    }

    #[test]
    fn round_trips_through_bytes_and_streams() {
        for r in samples() {
            assert_eq!(LatLngRect::from_bytes(&r.to_bytes()).expect("decodes"), r);

            let mut buf = Vec::new();
            r.encode(&mut buf).expect("vec writes cannot fail");
            assert_eq!(buf.len(), ENCODED_LEN);
            let mut input = buf.as_slice();
            assert_eq!(LatLngRect::decode(&mut input).expect("decodes"), r);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn consecutive_records_in_one_stream() {
        let mut buf = Vec::new();
        for r in samples() {
            r.encode(&mut buf).expect("write");
        }
        let mut input = buf.as_slice();
        for r in samples() {
            assert_eq!(LatLngRect::decode(&mut input).expect("decodes"), r);
        }
    }

    #[test]
    fn unsupported_version_is_malformed() {
        let mut bytes = rect(0.0, 0.0, 1.0, 1.0).to_bytes();
        bytes[0] = 2;
        let err = LatLngRect::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, RectError::UnsupportedVersion(2)));
        assert!(err.is_malformed());

        let err = LatLngRect::decode(&mut &bytes[..]).unwrap_err();
        assert!(matches!(err, RectError::UnsupportedVersion(2)));
    }

    #[test]
    fn invalid_intervals_are_rejected() {
        let mixed = raw(1, [1.0, 0.0, 0.0, 1.0]);
        let err = LatLngRect::from_bytes(&mixed).unwrap_err();
        assert!(matches!(err, RectError::InvalidEncoding(Violation::MixedEmptiness)));
        assert!(err.is_malformed());

        let out_of_range = raw(1, [0.0, 2.0, 0.0, 1.0]);
        let err = LatLngRect::decode(&mut out_of_range.as_slice()).unwrap_err();
        assert!(matches!(err, RectError::InvalidEncoding(Violation::LatitudeOutOfRange)));
        assert!(err.is_malformed());

        let nan = raw(1, [f64::NAN, 0.0, 0.0, 1.0]);
        assert!(LatLngRect::from_bytes(&nan).unwrap_err().is_malformed());
    }

    #[test]
    fn minus_pi_longitude_is_normalized_on_decode() {
        let bytes = raw(1, [0.0, 0.1, -std::f64::consts::PI, 0.5]);
        let r = LatLngRect::from_bytes(&bytes).expect("decodes");
        assert_eq!(r.lng().lo(), std::f64::consts::PI);
        assert!(r.is_inverted());
    }

    #[test]
    fn truncated_input() {
        let bytes = rect(0.0, 0.0, 1.0, 1.0).to_bytes();

        let err = LatLngRect::from_bytes(&bytes[..20]).unwrap_err();
        assert!(matches!(err, RectError::Truncated { expected: 33, got: 20 }));
        assert!(err.is_malformed());
        assert!(matches!(
            LatLngRect::from_bytes(&[]),
            Err(RectError::Truncated { expected: 33, got: 0 })
        ));

        let err = LatLngRect::decode(&mut &bytes[..20]).unwrap_err();
        assert!(matches!(&err, RectError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
        assert!(err.is_malformed());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let r = rect(5.0, 5.0, 6.0, 6.0);
        let mut bytes = r.to_bytes().to_vec();
        bytes.extend_from_slice(&[0xff; 7]);
        assert_eq!(LatLngRect::from_bytes(&bytes).expect("decodes"), r);
        assert!(!LatLngRect::from_point(ll(0.0, 0.0)).to_bytes().is_empty());
    }

    #[test]
    fn construction_errors_are_not_malformed_input() {
        assert!(!RectError::Invalid(Violation::MixedEmptiness).is_malformed());
    }
}

#[cfg(test)]
mod cap {
    use std::f64::consts::{FRAC_PI_2, PI};

    use sg_core::{Angle, ChordAngle, GeoRng, LatLng, Point};

    use super::helpers::{loose, random_rect, rect};
    use crate::sample::{random_cap, sample_point_in_cap};
    use crate::{Cap, Region};

    #[test]
    fn empty_full_and_area() {
        assert!(Cap::empty().is_empty());
        assert!(Cap::full().is_full());
        assert!(Cap::empty().rect_bound().is_empty());
        assert!(Cap::full().rect_bound().is_full());

        let hemi = Cap::from_axis_angle(Point::new(0.0, 0.0, 1.0), Angle::from_radians(FRAC_PI_2));
        assert!((hemi.area() - 2.0 * PI).abs() < 1e-14);
        let by_area = Cap::from_axis_area(Point::new(0.0, 0.0, 1.0), 2.0 * PI);
        assert!((by_area.height() - 1.0).abs() < 1e-15);
        assert_eq!(Cap::empty().area(), 0.0);
    }

    #[test]
    fn contains_and_add_point() {
        let x = Point::new(1.0, 0.0, 0.0);
        let y = Point::new(0.0, 1.0, 0.0);
        let cap = Cap::from_axis_angle(x, Angle::from_degrees(10.0));
        assert!(cap.contains(x));
        assert!(!cap.contains(y));
        let grown = cap.add_point(y);
        assert!(grown.contains(y));
        assert_eq!(grown.radius(), ChordAngle::RIGHT);
        assert_eq!(Cap::empty().add_point(y).axis(), y);
    }

    #[test]
    fn polar_cap_bound() {
        let cap = Cap::from_axis_angle(Point::new(0.0, 0.0, 1.0), Angle::from_degrees(10.0));
        let b = cap.rect_bound();
        assert!((b.lat().lo() - 80f64.to_radians()).abs() < 1e-14);
        assert_eq!(b.lat().hi(), FRAC_PI_2);
        assert!(b.lng().is_full());
    }

    #[test]
    fn equatorial_cap_bound() {
        let cap = Cap::from_axis_angle(Point::new(1.0, 0.0, 0.0), Angle::from_degrees(10.0));
        let b = cap.rect_bound();
        let ten = 10f64.to_radians();
        assert!((b.lat().lo() + ten).abs() < 1e-14 && (b.lat().hi() - ten).abs() < 1e-14);
        assert!((b.lng().lo() + ten).abs() < 1e-14 && (b.lng().hi() - ten).abs() < 1e-14);
    }

    #[test]
    fn cap_bound_covers_sampled_points() {
        let mut rng = GeoRng::new(41);
        for _ in 0..100 {
            let cap = random_cap(&mut rng, 1e-6, 4.0 * PI);
            let b = loose(&cap.rect_bound());
            for _ in 0..10 {
                let p = sample_point_in_cap(&mut rng, &cap);
                assert!(b.contains_point(p), "{} outside {b}", LatLng::from_point(p));
            }
        }
    }

    #[test]
    fn rect_cap_bound_covers_vertices() {
        let mut rng = GeoRng::new(42);
        for _ in 0..200 {
            let r = random_rect(&mut rng);
            let cap = r.cap_bound();
            for k in 0..4 {
                let d = ChordAngle::between(cap.axis(), r.vertex(k).to_point());
                assert!(d.length2() <= cap.radius().length2() + 1e-14, "vertex {k} of {r}");
            }
        }
        assert!(crate::LatLngRect::empty().cap_bound().is_empty());
    }

    #[test]
    fn small_rect_gets_tight_cap() {
        let r = rect(-1.0, -1.0, 1.0, 1.0);
        let cap = r.cap_bound();
        assert!(cap.angle().degrees() < 2.0, "cap angle {}", cap.angle().degrees());
    }
}

#[cfg(test)]
mod region {
    use sg_core::{Angle, Point};

    use super::helpers::{ll, rect};
    use crate::{Cap, LatLngRect, LatLngRectBuilder, Region};

    fn bounds(regions: &[&dyn Region]) -> LatLngRect {
        regions.iter().fold(LatLngRect::empty(), |acc, r| acc.union(&r.rect_bound()))
    }

    #[test]
    fn every_region_reports_a_bound() {
        let r = rect(0.0, 0.0, 5.0, 5.0);
        let p = ll(-20.0, 40.0);
        let cap = Cap::from_axis_angle(Point::new(0.0, 0.0, -1.0), Angle::from_degrees(1.0));
        let mut b = LatLngRectBuilder::new();
        b.add_point(ll(60.0, -30.0));

        assert_eq!(r.rect_bound(), r);
        assert_eq!(p.rect_bound(), LatLngRect::from_point(p));
        assert_eq!(b.rect_bound(), b.build());

        let regions: [&dyn Region; 4] = [&r, &p, &cap, &b];
        let all = bounds(&regions);
        assert!(all.contains_rect(&r));
        assert!(all.contains(p));
        assert!(all.contains(ll(60.0, -30.0)));
        assert!(all.lat().lo() <= -89.0f64.to_radians());
    }
}

#[cfg(test)]
mod sample {
    use sg_core::GeoRng;

    use super::helpers::{loose, random_rect};
    use crate::sample::{random_cap, sample_point_in_rect};

    #[test]
    fn rect_samples_stay_inside() {
        let mut rng = GeoRng::new(51);
        for _ in 0..100 {
            let r = random_rect(&mut rng);
            let l = loose(&r);
            for _ in 0..10 {
                assert!(l.contains_point(sample_point_in_rect(&mut rng, &r)));
            }
        }
    }

    #[test]
    fn random_cap_area_in_range() {
        let mut rng = GeoRng::new(52);
        for _ in 0..100 {
            let cap = random_cap(&mut rng, 0.01, 1.0);
            assert!(cap.area() >= 0.01 * (1.0 - 1e-12) && cap.area() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let mut a = GeoRng::new(53);
        let mut b = GeoRng::new(53);
        let ra = random_rect(&mut a);
        let rb = random_rect(&mut b);
        assert_eq!(ra, rb);
        assert_eq!(sample_point_in_rect(&mut a, &ra), sample_point_in_rect(&mut b, &rb));
    }
}
