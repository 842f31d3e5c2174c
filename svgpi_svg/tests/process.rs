use pathinterp::{Options, PathSampleResult};
use svgpi_svg::{process_svg_str, process_svg_str_to_json, Config};

/// Returns keyed paths in document order.
fn keyed(result: PathSampleResult) -> Vec<(String, Vec<f64>)> {
    match result {
        PathSampleResult::Keyed(paths) => paths.into_iter().collect(),
        other => panic!("unexpected result: {:?}", other),
    }
}

fn coarse(join_path_data: bool) -> Options {
    Options {
        min_distance: 0.5,
        round_to_nearest: 0.25,
        sample_frequency: 0.5,
        join_path_data,
        ..Options::default()
    }
}

#[test]
fn keyed_paths_in_document_order() {
    let svg = r#"
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
            <path d="M0,0 L10,0"/>
            <g>
                <path id="side" d="M0,0 L0,4"/>
            </g>
            <path d="M1,1 L3,1"/>
        </svg>
    "#;

    let result = process_svg_str(svg, &coarse(false)).unwrap();
    assert_eq!(
        keyed(result),
        vec![
            ("path_0".to_string(), vec![5.0, 0.0, 10.0, 0.0]),
            ("side".to_string(), vec![0.0, 2.0, 0.0, 4.0]),
            ("path_1".to_string(), vec![2.0, 1.0, 3.0, 1.0]),
        ]
    );
}

#[test]
fn nested_group_transforms() {
    let svg = r#"
        <svg xmlns="http://www.w3.org/2000/svg">
            <g transform="translate(10,0)">
                <g transform="scale(2)">
                    <path d="M0,0 L1,1"/>
                </g>
                <path d="M0,0 L1,1" transform="rotate(90)"/>
            </g>
            <path d="M0,0 L1,1"/>
        </svg>
    "#;

    let opt = Options {
        min_distance: 0.0,
        sample_frequency: 1.0,
        join_path_data: true,
        ..Options::default()
    };

    // rotate(90) maps (1,1) onto (-1,1), up to a tiny error snapped toward zero.
    let result = process_svg_str(svg, &opt).unwrap();
    match result {
        PathSampleResult::Joined(values) => {
            assert_eq!(values.len(), 6);
            assert_eq!(&values[..2], &[12.0, 2.0]);
            assert!((values[2] - 9.0).abs() <= 0.25);
            assert!((values[3] - 1.0).abs() <= 0.25);
            assert_eq!(&values[4..], &[1.0, 1.0]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn path_without_data_and_foreign_elements() {
    let svg = r#"
        <svg xmlns="http://www.w3.org/2000/svg">
            <rect width="10" height="10" transform="scale(5)"/>
            <path id="nothing"/>
            <text>M0,0 L10,0</text>
            <path id="line" d="M0,0 L10,0"/>
        </svg>
    "#;

    let result = process_svg_str(svg, &coarse(false)).unwrap();
    // `rect` transform ends with the element.
    assert_eq!(keyed(result), vec![("line".to_string(), vec![5.0, 0.0, 10.0, 0.0])]);
}

#[test]
fn trim_spans_all_paths() {
    let svg = r#"
        <svg xmlns="http://www.w3.org/2000/svg">
            <path d="M-4,7 L6,7"/>
            <path d="M20,3 L20,13"/>
        </svg>
    "#;

    let opt = Options { trim: true, ..coarse(true) };
    let result = process_svg_str(svg, &opt).unwrap();
    assert_eq!(
        result,
        PathSampleResult::Joined(vec![0.0, 0.0, 5.0, 0.0, 19.0, 1.0, 19.0, 6.0])
    );
}

#[test]
fn arcs_and_smooth_curves_stay_finite() {
    let svg = r#"
        <svg xmlns="http://www.w3.org/2000/svg">
            <g transform="matrix(0.5 0.2 -0.3 1.5 12 -4) skewX(10)">
                <path d="M10 80 Q 52.5 10, 95 80 T 180 80"/>
                <path d="M10 315 L 110 215 A 30 50 0 0 1 162.55 162.45 L 172.55 152.45
                         A 30 50 -45 0 1 215.1 109.9 L 315 10"/>
                <path d="M10 10 C 20 20, 40 20, 50 10 S 80 0 90 10 a1 1 0 00 1 1 z"/>
            </g>
        </svg>
    "#;

    let paths = keyed(process_svg_str(svg, &Options::default()).unwrap());

    assert_eq!(paths.len(), 3);
    for (key, values) in &paths {
        assert!(!values.is_empty(), "{} is empty", key);
        assert_eq!(values.len() % 2, 0);
        assert!(values.iter().all(|v| v.is_finite()));
        // Snapped onto the 0.25 grid.
        assert!(values.iter().all(|v| (v * 4.0).fract() == 0.0));
    }
}

#[test]
fn json_output() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="a" d="M0,0 L10,0"/></svg>"#;

    let config = Config {
        sample_frequency: 0.5,
        ..Config::default()
    };
    assert_eq!(process_svg_str_to_json(svg, &config).unwrap(), r#"{"a":[5.0,0.0,10.0,0.0]}"#);

    let config = Config {
        sample_frequency: 0.5,
        join_path_data: true,
        pretty: true,
        pretty_indent: 1,
        ..Config::default()
    };
    assert_eq!(
        process_svg_str_to_json(svg, &config).unwrap(),
        "[\n 5.0,\n 0.0,\n 10.0,\n 0.0\n]"
    );
}
