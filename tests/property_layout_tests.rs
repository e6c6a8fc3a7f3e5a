use proptest::prelude::*;
use tornado_rs::api::TornadoChartConfig;
use tornado_rs::convert::{CategoricalTable, CategoryColumn, ValueColumn, convert};
use tornado_rs::core::{PlotArea, Viewport, column_width};
use tornado_rs::format::FormatServices;
use tornado_rs::layout::{LayoutOptions, layout_frame};

fn table(left: &[f64], right: &[f64]) -> CategoricalTable {
    let names: Vec<String> = (0..left.len()).map(|i| format!("C{i}")).collect();
    CategoricalTable::new(
        CategoryColumn::new("Category", names),
        vec![
            ValueColumn::from_values("Left", left),
            ValueColumn::from_values("Right", right),
        ],
    )
}

proptest! {
    #[test]
    fn column_width_stays_inside_available_width(
        value in -1.0e6f64..1.0e6,
        min in -1.0e6f64..0.0,
        span in 0.0f64..2.0e6,
        available in 0.0f64..5_000.0
    ) {
        let width = column_width(value, min, min + span, available);
        prop_assert!(width >= 0.0);
        prop_assert!(width <= available);
    }

    #[test]
    fn columns_stay_on_their_side_of_the_midline(
        pairs in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..40),
        width in 200u32..2_000,
        height in 200u32..1_200
    ) {
        let left: Vec<f64> = pairs.iter().map(|(l, _)| *l).collect();
        let right: Vec<f64> = pairs.iter().map(|(_, r)| *r).collect();
        let config = TornadoChartConfig::new(Viewport::new(width, height));
        let services = FormatServices::default();
        let view = convert(&table(&left, &right), &config, &services);

        let plot = PlotArea::new(0.0, 0.0, f64::from(width), f64::from(height));
        let options = LayoutOptions::new(&config.labels, &config.categories);
        let frame = layout_frame(&view, plot, options, &services);
        prop_assume!(!frame.is_empty());

        let axis = frame.axis_line.expect("two series draw a midline");
        for column in &frame.columns {
            prop_assert!(column.width >= 0.0);
            prop_assert!(column.x >= plot.x - 1e-9);
            prop_assert!(column.x + column.width <= plot.right() + 1e-9);
            prop_assert!(column.y + column.height <= plot.bottom() + 1e-9);
            if column.key.series_index == 0 {
                prop_assert!(column.x + column.width <= axis.x + 1e-9);
            } else {
                prop_assert!(column.x >= axis.x - 1e-9);
            }
            if let Some(label) = &column.label {
                prop_assert!(!label.data.text.is_empty());
            }
        }
        prop_assert_eq!(frame.columns.len(), pairs.len() * 2);
    }

    #[test]
    fn layout_is_a_pure_function_of_its_inputs(
        values in prop::collection::vec(-500.0f64..500.0, 1..20)
    ) {
        let config = TornadoChartConfig::new(Viewport::new(800, 600));
        let services = FormatServices::default();
        let view = convert(&table(&values, &values), &config, &services);
        let plot = PlotArea::new(5.0, 10.0, 790.0, 580.0);
        let options = LayoutOptions::new(&config.labels, &config.categories);

        let first = layout_frame(&view, plot, options, &services);
        let second = layout_frame(&view, plot, options, &services);
        prop_assert_eq!(first, second);
    }
}
