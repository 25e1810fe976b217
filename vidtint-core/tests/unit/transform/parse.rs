use super::*;

#[test]
fn color_filter_argument_parses_both_components() {
    let t = parse_color_filter("0.33,1.5").unwrap();
    assert_eq!(
        t,
        FrameTransform::ColorFilter {
            hue: 0.33,
            saturation: 1.5
        }
    );

    // Whitespace around the comma is tolerated.
    assert!(parse_color_filter(" 0.1 , 2 ").is_ok());
}

#[test]
fn malformed_color_filter_arguments_are_validation_errors() {
    for arg in ["0.33", "a,b", "0.3,", ",1.0", "0.3;1.0", "nan,1.0"] {
        let err = parse_color_filter(arg).unwrap_err();
        assert!(matches!(err, TintError::Validation(_)), "arg '{arg}'");
    }
}

#[test]
fn display_names_the_transform_and_parameters() {
    let t = FrameTransform::Transparency { factor: 0.5 };
    assert_eq!(t.to_string(), "transparency factor=0.5");

    let t = FrameTransform::ColorFilter {
        hue: 0.33,
        saturation: 2.0,
    };
    assert_eq!(t.to_string(), "color filter hue=0.33 saturation=2");
}

#[test]
fn color_filter_validation_rejects_non_finite_values() {
    assert!(
        FrameTransform::ColorFilter {
            hue: f64::INFINITY,
            saturation: 1.0
        }
        .validate()
        .is_err()
    );
    assert!(
        FrameTransform::ColorFilter {
            hue: 0.5,
            saturation: f64::NAN
        }
        .validate()
        .is_err()
    );
    assert!(
        FrameTransform::ColorFilter {
            hue: 0.5,
            saturation: 3.0
        }
        .validate()
        .is_ok()
    );
}
