use chart_grammar::api::{
    ChannelDef, Layer, ScaleOverride, ViewConfig, ViewLayout, prepare_view, standard_channels,
};
use chart_grammar::coordinate::{PolarOptions, TransformOptions};
use chart_grammar::core::{CanvasRect, Point, Value};
use chart_grammar::scale::{Scale, ScaleKind};
use chart_grammar::ChartError;
use indexmap::IndexMap;

fn numbers(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

fn letters(values: &[&str]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}

fn interval_defs() -> Vec<ChannelDef> {
    vec![
        ChannelDef::required("x").with_scale(ScaleKind::Band),
        ChannelDef::required("y"),
        ChannelDef::optional("fill"),
    ]
}

fn bar_layer() -> Layer {
    let values = IndexMap::from([
        ("x".to_owned(), letters(&["mon", "tue"])),
        ("y".to_owned(), numbers(&[2.0, 4.0])),
    ]);
    let fields = IndexMap::from([("y".to_owned(), "sales".to_owned())]);
    Layer::bind(interval_defs(), values, &fields).expect("bind bar layer")
}

#[test]
fn layout_canvas_subtracts_paddings() {
    let layout = ViewLayout::new(10.0, 20.0, 300.0, 200.0).with_padding(5.0, 15.0, 25.0, 35.0);
    assert_eq!(layout.canvas(), CanvasRect::new(15.0, 55.0, 280.0, 140.0));
}

#[test]
fn bar_view_builds_band_x_and_flipped_linear_y() {
    let view = prepare_view(&[bar_layer()], &ViewConfig::default()).expect("prepare view");

    assert!(matches!(view.scale("x"), Some(Scale::Band(_))));
    assert_eq!(view.specs["y"].kind, ScaleKind::Linear);
    assert_eq!(view.specs["y"].label.as_deref(), Some("sales"));

    let mapped = &view.layers[0];
    assert_eq!(mapped["y"], numbers(&[1.0, 0.0]));
    let x0 = mapped["x"][0].as_f64().expect("band start");
    let x1 = mapped["x"][1].as_f64().expect("band start");
    assert!(x0 < x1);

    let canvas = ViewLayout::default().canvas();
    assert_eq!(view.coordinate.canvas(), canvas);
    let top_left = view.coordinate.apply(Point::new(0.0, 0.0));
    assert_eq!(top_left, Point::new(canvas.x, canvas.y));
}

#[test]
fn view_config_transforms_reach_the_coordinate_system() {
    let config = ViewConfig {
        transforms: vec![
            TransformOptions::Transpose,
            TransformOptions::Polar(PolarOptions::default()),
        ],
        ..ViewConfig::default()
    };
    let view = prepare_view(&[bar_layer()], &config).expect("prepare view");
    assert!(view.coordinate.is_polar());
    assert!(view.coordinate.is_transpose());
}

#[test]
fn nice_override_rounds_inferred_domain() {
    let values = IndexMap::from([
        ("x".to_owned(), numbers(&[0.3, 97.8])),
        ("y".to_owned(), numbers(&[1.0, 2.0])),
    ]);
    let layer = Layer::bind(standard_channels(), values, &IndexMap::new()).expect("bind");
    let mut config = ViewConfig::default();
    config.scales.insert(
        "x".to_owned(),
        ScaleOverride {
            nice: true,
            ..ScaleOverride::default()
        },
    );

    let view = prepare_view(&[layer], &config).expect("prepare view");
    let Some(Scale::Linear(x)) = view.scale("x") else {
        panic!("expected linear x scale");
    };
    assert_eq!(x.domain(), (0.0, 100.0));
}

#[test]
fn missing_required_channel_is_reported() {
    let values = IndexMap::from([("x".to_owned(), letters(&["mon"]))]);
    let err = Layer::bind(interval_defs(), values, &IndexMap::new()).expect_err("no y");
    assert!(matches!(err, ChartError::MissingChannel(ref name) if name == "y"));
}

#[test]
fn band_channel_resolved_to_dot_is_rejected() {
    let points = Layer::bind(
        vec![
            ChannelDef::required("x").with_scale(ScaleKind::Dot),
            ChannelDef::required("y"),
        ],
        IndexMap::from([
            ("x".to_owned(), letters(&["mon"])),
            ("y".to_owned(), numbers(&[3.0])),
        ]),
        &IndexMap::new(),
    )
    .expect("bind point layer");

    let err = prepare_view(&[points, bar_layer()], &ViewConfig::default())
        .expect_err("first declared kind wins");
    assert!(matches!(err, ChartError::BandScaleRequired(ref name) if name == "x"));
    assert_eq!(err.to_string(), "x channel needs band scale");
}

#[test]
fn layers_keep_their_own_mapped_values() {
    let second = Layer::bind(
        interval_defs(),
        IndexMap::from([
            ("x".to_owned(), letters(&["wed"])),
            ("y".to_owned(), numbers(&[3.0])),
            ("fill".to_owned(), letters(&["promo"])),
        ]),
        &IndexMap::new(),
    )
    .expect("bind second layer");

    let view = prepare_view(&[bar_layer(), second], &ViewConfig::default()).expect("prepare");
    assert_eq!(view.layers.len(), 2);
    assert_eq!(view.layers[1]["y"], numbers(&[0.5]));
    assert!(view.layers[1]["fill"][0].as_str().is_some());
    assert!(!view.layers[0].contains_key("fill"));
}

#[test]
fn view_without_rows_prepares_identity_scales() {
    let values = IndexMap::from([("x".to_owned(), Vec::new()), ("y".to_owned(), Vec::new())]);
    let layer = Layer::bind(standard_channels(), values, &IndexMap::new()).expect("bind layer");

    let view = prepare_view(&[layer], &ViewConfig::default()).expect("prepare empty view");

    assert!(matches!(view.scale("x"), Some(Scale::Identity)));
    assert!(matches!(view.scale("y"), Some(Scale::Identity)));
    assert!(view.layers[0]["x"].is_empty());
    assert!(view.layers[0]["y"].is_empty());
}

#[test]
fn empty_band_channel_still_gets_a_band_scale() {
    let values = IndexMap::from([("x".to_owned(), Vec::new()), ("y".to_owned(), Vec::new())]);
    let layer = Layer::bind(interval_defs(), values, &IndexMap::new()).expect("bind layer");

    let view = prepare_view(&[layer], &ViewConfig::default()).expect("prepare empty bars");

    assert!(matches!(view.scale("x"), Some(Scale::Band(_))));
    assert_eq!(view.specs["y"].kind, ScaleKind::Identity);
}
