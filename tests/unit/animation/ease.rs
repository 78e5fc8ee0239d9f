use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::In(2.0),
    Ease::In(0.5),
    Ease::Out(2.0),
    Ease::Out(0.5),
    Ease::InOut(1.5),
    Ease::InOut(4.0),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn in_out_is_symmetric_around_midpoint() {
    let ease = Ease::InOut(1.5);
    assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
    for t in [0.1, 0.2, 0.3, 0.4] {
        let sum = ease.apply(t) + ease.apply(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-12, "t={t}");
    }
}

#[test]
fn in_out_survives_extreme_shape_factor() {
    let v = Ease::InOut(5000.0).apply(0.5);
    assert!(v.is_finite());
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn out_mirrors_in_with_inverted_factor() {
    for t in [0.1, 0.5, 0.9] {
        assert_eq!(Ease::Out(3.0).apply(t), Ease::In(1.0 / 3.0).apply(t));
    }
}

#[test]
fn inputs_are_clamped() {
    assert_eq!(Ease::In(2.0).apply(-1.0), 0.0);
    assert_eq!(Ease::InOut(1.5).apply(2.0), 1.0);
}

#[test]
fn curve_matches_apply() {
    let f = Ease::InOut(1.5).curve();
    assert_eq!(f(0.3), Ease::InOut(1.5).apply(0.3));
}

#[test]
fn serde_shape() {
    let s = serde_json::to_string(&Ease::InOut(1.5)).unwrap();
    assert_eq!(s, r#"{"kind":"in_out","c":1.5}"#);
    let back: Ease = serde_json::from_str(r#"{"kind":"linear"}"#).unwrap();
    assert_eq!(back, Ease::Linear);
}
