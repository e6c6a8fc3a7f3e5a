use rust_decimal::Decimal;
use tornado_rs::api::TornadoChartConfig;
use tornado_rs::convert::{
    BLANK_CATEGORY_TEXT, CategoricalTable, CategoryColumn, CategoryValue, HIGHLIGHTED_TOOLTIP_NAME,
    SeriesGroup, SeriesObjects, ValueColumn, convert,
};
use tornado_rs::core::Viewport;
use tornado_rs::format::FormatServices;
use tornado_rs::render::Color;

fn regions() -> CategoryColumn {
    CategoryColumn::new(
        "Region",
        ["North", "South", "East", "West", "Central", "Islands"],
    )
}

fn config() -> TornadoChartConfig {
    TornadoChartConfig::new(Viewport::new(1000, 500))
}

fn two_series_table() -> CategoricalTable {
    CategoricalTable::new(
        regions(),
        vec![
            ValueColumn::from_values("Sales 2023", &[120.0, 80.0, 45.0, 200.0, 95.0, 10.0]),
            ValueColumn::from_values("Sales 2024", &[140.0, 70.0, 60.0, 180.0, 110.0, 25.0]),
        ],
    )
}

#[test]
fn produces_one_point_per_category_and_series() {
    let view = convert(&two_series_table(), &config(), &FormatServices::default());

    assert_eq!(view.categories.len(), 6);
    assert_eq!(view.series.len(), 2);
    assert_eq!(view.data_points.len(), 12);
    assert!(view.highlighted_data_points.is_empty());
    assert!(!view.has_highlights);

    // Series-major ordering.
    for (index, point) in view.data_points.iter().enumerate() {
        assert_eq!(point.series_index, index / 6);
        assert_eq!(point.category_index, index % 6);
    }
    assert_eq!(view.data_points[7].value, 70.0);
    assert_eq!(view.category_display_name, "Region");
}

#[test]
fn scale_minimum_is_floored_at_zero() {
    let view = convert(&two_series_table(), &config(), &FormatServices::default());
    assert_eq!(view.min_value, 0.0);
    assert_eq!(view.max_value, 200.0);
    assert!(view.data_points.iter().all(|point| point.min_value == 0.0));
    assert!(view.data_points.iter().all(|point| point.max_value == 200.0));

    let negative = CategoricalTable::new(
        CategoryColumn::new("Region", ["A", "B"]),
        vec![ValueColumn::from_values("Delta", &[-40.0, 15.0])],
    );
    let view = convert(&negative, &config(), &FormatServices::default());
    assert_eq!(view.min_value, -40.0);
    assert_eq!(view.max_value, 15.0);
}

#[test]
fn extra_value_columns_are_dropped() {
    let mut table = two_series_table();
    table
        .values
        .push(ValueColumn::from_values("Sales 2025", &[1.0; 6]));

    let view = convert(&table, &config(), &FormatServices::default());
    assert_eq!(view.series.len(), 2);
    assert_eq!(view.data_points.len(), 12);
    assert_eq!(view.series[1].name, "Sales 2024");
}

#[test]
fn missing_or_empty_input_yields_empty_view() {
    let services = FormatServices::default();

    let view = convert(&CategoricalTable::default(), &config(), &services);
    assert!(view.is_empty());

    let no_values = CategoricalTable::new(regions(), Vec::new());
    assert!(convert(&no_values, &config(), &services).is_empty());

    let empty_column = CategoricalTable::new(regions(), vec![ValueColumn::new("Sales", Vec::new())]);
    assert!(convert(&empty_column, &config(), &services).is_empty());

    let empty_categories = CategoricalTable::new(
        CategoryColumn::new("Region", Vec::<&str>::new()),
        vec![ValueColumn::from_values("Sales", &[1.0])],
    );
    assert!(convert(&empty_categories, &config(), &services).is_empty());
}

#[test]
fn null_and_nan_values_render_as_zero() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["A", "B", "C"]),
        vec![ValueColumn::new(
            "Sales",
            vec![Some(5.0), None, Some(f64::NAN)],
        )],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    let values: Vec<f64> = view.data_points.iter().map(|point| point.value).collect();
    assert_eq!(values, vec![5.0, 0.0, 0.0]);
}

#[test]
fn infinite_values_render_as_zero() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["A", "B", "C"]),
        vec![ValueColumn::new(
            "Sales",
            vec![Some(f64::INFINITY), Some(5.0), Some(f64::NEG_INFINITY)],
        )
        .with_highlights(vec![Some(f64::INFINITY), Some(2.0), None])],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    let values: Vec<f64> = view.data_points.iter().map(|point| point.value).collect();
    assert_eq!(values, vec![0.0, 5.0, 0.0]);
    assert_eq!(view.max_value, 5.0);

    let highlighted = &view.highlighted_data_points[0];
    assert_eq!(highlighted.highlight_value, None);
    assert!(!highlighted.highlight);
    assert_eq!(highlighted.value, 0.0);
}

#[test]
fn null_categories_show_blank_text() {
    let table = CategoricalTable::new(
        CategoryColumn::new(
            "Region",
            vec![CategoryValue::from("North"), CategoryValue::Null],
        ),
        vec![ValueColumn::from_values("Sales", &[1.0, 2.0])],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    assert_eq!(view.categories[1].text, BLANK_CATEGORY_TEXT);
    assert!(view.categories[1].text_width > 0.0);
}

#[test]
fn numeric_categories_use_the_column_format() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Year", [2023.0, 2024.0]).with_format_string("0"),
        vec![ValueColumn::from_values("Sales", &[1.0, 2.0])],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    assert_eq!(view.categories[0].text, "2023");
    assert_eq!(view.categories[1].text, "2024");
}

#[test]
fn highlights_build_a_parallel_point_list() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["A", "B", "C"]),
        vec![
            ValueColumn::from_values("Plan", &[10.0, 20.0, 30.0])
                .with_highlights(vec![Some(4.0), None, Some(30.0)]),
            ValueColumn::from_values("Actual", &[12.0, 18.0, 33.0]),
        ],
    );
    let view = convert(&table, &config(), &FormatServices::default());

    assert!(view.has_highlights);
    assert_eq!(
        view.highlighted_data_points.len(),
        view.data_points.len()
    );
    assert_eq!(view.render_points().len(), 6);

    let first = &view.highlighted_data_points[0];
    assert!(first.highlight);
    assert_eq!(first.value, 4.0);
    assert_eq!(first.highlight_value, Some(4.0));
    assert_eq!(
        first.tooltip.last().map(|item| item.display_name.as_str()),
        Some(HIGHLIGHTED_TOOLTIP_NAME)
    );

    let unhighlighted = &view.highlighted_data_points[1];
    assert!(!unhighlighted.highlight);
    assert_eq!(unhighlighted.value, 20.0);

    // The second series has no highlight array at all.
    assert!(view.highlighted_data_points[3..].iter().all(|point| !point.highlight));
}

#[test]
fn legend_exists_only_for_dynamic_series() {
    let static_view = convert(&two_series_table(), &config(), &FormatServices::default());
    assert!(!static_view.has_dynamic_series);
    assert!(static_view.legend.is_none());

    let table = CategoricalTable::new(
        regions(),
        vec![
            ValueColumn::from_values("Sales", &[1.0; 6]).with_group(SeriesGroup {
                name: "Online".to_owned(),
                objects: SeriesObjects::default(),
            }),
            ValueColumn::from_values("Sales", &[2.0; 6]).with_group(SeriesGroup {
                name: "Retail".to_owned(),
                objects: SeriesObjects::default(),
            }),
        ],
    )
    .with_series_title("Channel");
    let view = convert(&table, &config(), &FormatServices::default());

    assert!(view.has_dynamic_series);
    let legend = view.legend.expect("dynamic series build a legend");
    assert_eq!(legend.title.as_deref(), Some("Channel"));
    let labels: Vec<&str> = legend.entries.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, vec!["Online", "Retail"]);
    assert_eq!(legend.entries[0].color, view.series[0].fill);
}

#[test]
fn legend_title_override_and_hidden_title() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["A"]),
        vec![ValueColumn::from_values("Sales", &[1.0]).with_group(SeriesGroup {
            name: "Online".to_owned(),
            objects: SeriesObjects::default(),
        })],
    )
    .with_series_title("Channel");

    let mut custom = config();
    custom.legend.title_text = Some("Sales channel".to_owned());
    let view = convert(&table, &custom, &FormatServices::default());
    assert_eq!(
        view.legend.and_then(|legend| legend.title).as_deref(),
        Some("Sales channel")
    );

    let mut hidden = config();
    hidden.legend.show_title = false;
    let view = convert(&table, &hidden, &FormatServices::default());
    assert_eq!(view.legend.and_then(|legend| legend.title), None);
}

#[test]
fn axis_end_caps_only_its_series() {
    let mut table = two_series_table();
    table.values[1] = table.values[1].clone().with_objects(SeriesObjects {
        fill: None,
        axis_end: Some(500.0),
    });
    let view = convert(&table, &config(), &FormatServices::default());

    assert!(view.data_points[..6].iter().all(|point| point.max_value == 200.0));
    assert!(view.data_points[6..].iter().all(|point| point.max_value == 500.0));
    assert_eq!(view.series[1].axis_end, Some(500.0));
}

#[test]
fn default_palette_and_fill_override() {
    let view = convert(&two_series_table(), &config(), &FormatServices::default());
    assert_eq!(view.series[0].fill, Color::PURPLE);
    assert_eq!(view.series[1].fill, Color::TEAL);
    assert!(view.data_points[6..].iter().all(|point| point.color == Color::TEAL));

    let orange = Color::from_hex("#ff8800").expect("valid hex");
    let mut table = two_series_table();
    table.values[0] = table.values[0].clone().with_objects(SeriesObjects {
        fill: Some(orange),
        axis_end: None,
    });
    let view = convert(&table, &config(), &FormatServices::default());
    assert_eq!(view.series[0].fill, orange);
    assert_eq!(view.data_points[0].color, orange);
}

#[test]
fn group_objects_take_precedence_over_column_objects() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["A"]),
        vec![
            ValueColumn::from_values("Sales", &[1.0])
                .with_objects(SeriesObjects {
                    fill: Some(blue),
                    axis_end: None,
                })
                .with_group(SeriesGroup {
                    name: "Online".to_owned(),
                    objects: SeriesObjects {
                        fill: Some(red),
                        axis_end: None,
                    },
                }),
        ],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    assert_eq!(view.series[0].fill, red);
}

#[test]
fn tooltips_name_category_and_series() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["North"]),
        vec![ValueColumn::from_values("Sales", &[1_234.5]).with_format_string("#,0.00")],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    let tooltip = &view.data_points[0].tooltip;

    assert_eq!(tooltip.len(), 2);
    assert_eq!(tooltip[0].display_name, "Region");
    assert_eq!(tooltip[0].value, "North");
    assert_eq!(tooltip[1].display_name, "Sales");
    assert_eq!(tooltip[1].value, "1,234.50");
}

#[test]
fn identities_distinguish_category_and_series() {
    let view = convert(&two_series_table(), &config(), &FormatServices::default());
    let first = &view.data_points[0].identity;
    assert_ne!(first, &view.data_points[1].identity);
    assert_ne!(first, &view.data_points[6].identity);
    assert_eq!(first.category.as_deref(), Some("North"));
}

#[test]
fn repeated_and_null_categories_get_distinct_identities() {
    let table = CategoricalTable::new(
        CategoryColumn::new(
            "Region",
            vec![
                CategoryValue::Null,
                CategoryValue::Null,
                CategoryValue::from("A"),
                CategoryValue::from("A"),
            ],
        ),
        vec![ValueColumn::from_values("Sales", &[1.0, 2.0, 3.0, 4.0])],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    let ids: Vec<_> = view.data_points.iter().map(|point| &point.identity).collect();

    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[2], ids[3]);
    assert_eq!(ids[2].category, ids[3].category);
    assert_eq!(ids[3].category_index, Some(3));
    assert!(view.series[0].identity.category_index.is_none());
}

#[test]
fn decimal_columns_convert_to_f64() {
    let table = CategoricalTable::new(
        CategoryColumn::new("Region", ["A", "B"]),
        vec![
            ValueColumn::from_decimals(
                "Revenue",
                &[Some(Decimal::new(12_550, 2)), None],
            )
            .expect("decimals convert"),
        ],
    );
    let view = convert(&table, &config(), &FormatServices::default());
    assert_eq!(view.data_points[0].value, 125.5);
    assert_eq!(view.data_points[1].value, 0.0);
}
