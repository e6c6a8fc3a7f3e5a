use tornado_rs::api::{
    CategoryAxisPosition, DataLabelSettings, LegendPosition, ScrollSettings, TornadoChartConfig,
};
use tornado_rs::core::Viewport;
use tornado_rs::format::DisplayUnits;
use tornado_rs::render::Color;
use tornado_rs::TornadoError;

#[test]
fn config_json_round_trip() {
    let config = TornadoChartConfig::new(Viewport::new(1280, 720))
        .with_labels(DataLabelSettings {
            precision: Some(1),
            display_units: DisplayUnits::Thousands,
            ..DataLabelSettings::default()
        })
        .with_scroll(ScrollSettings {
            category_min_height: 30.0,
            ..ScrollSettings::default()
        });

    let json = config.to_json_pretty().expect("serialize config");
    let restored = TornadoChartConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn missing_sections_take_defaults() {
    let config = TornadoChartConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
        .expect("parse minimal config");

    assert_eq!(config, TornadoChartConfig::new(Viewport::new(640, 480)));
    assert!(config.labels.show);
    assert_eq!(config.labels.display_units, DisplayUnits::Auto);
    assert_eq!(config.categories.position, CategoryAxisPosition::Left);
    assert_eq!(config.legend.position, LegendPosition::Top);
    assert_eq!(config.scroll.category_min_height, 25.0);
    assert_eq!(config.scroll.min_thumb_length, 15.0);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let config = TornadoChartConfig::from_json_str(
        r#"{
            "viewport": {"width": 640, "height": 480},
            "labels": {"show": false},
            "categories": {"position": "Right"}
        }"#,
    )
    .expect("parse partial config");

    assert!(!config.labels.show);
    assert_eq!(config.labels.font_size_px, 12.0);
    assert_eq!(config.categories.position, CategoryAxisPosition::Right);
    assert_eq!(config.categories.fill, Color::GRAY);
}

#[test]
fn malformed_json_is_reported_as_invalid_settings() {
    let error = TornadoChartConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(error, TornadoError::InvalidSettings(_)));
}

#[test]
fn validation_rejects_unusable_values() {
    let base = TornadoChartConfig::new(Viewport::new(640, 480));
    assert!(base.validate().is_ok());

    let mut config = base.clone();
    config.labels.font_size_px = 0.0;
    assert!(config.validate().is_err());

    let mut config = base.clone();
    config.labels.precision = Some(40);
    assert!(config.validate().is_err());

    let mut config = base.clone();
    config.scroll.min_thumb_length = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = base.clone();
    config.scroll.scrollbar_width = -1.0;
    assert!(config.validate().is_err());

    let mut config = base;
    config.labels.inside_fill = Color::rgba(2.0, 0.0, 0.0, 1.0);
    assert!(config.validate().is_err());
}

#[test]
fn invalid_json_values_fail_validation() {
    let result = TornadoChartConfig::from_json_str(
        r#"{"viewport":{"width":640,"height":480},"scroll":{"category_min_height":-5.0}}"#,
    );
    assert!(matches!(result, Err(TornadoError::InvalidSettings(_))));
}
