//! Bar and matrix heatmap scene builder tests.

use irstats::plot::bar::{build_bar_scene, BarEntry, BarFormat};
use irstats::plot::heatmap::build_heat_scene;
use irstats::units;

#[test]
fn test_bar_scene_preserves_order_and_scales_fractions() {
    let entries = vec![
        BarEntry {
            label: "Mazda MX-5 Cup".to_string(),
            value: 100.0,
        },
        BarEntry {
            label: "Skip Barber RT2000".to_string(),
            value: 25.0,
        },
    ];
    let scene = build_bar_scene(&entries, &BarFormat::default()).unwrap();

    assert_eq!(scene.max_value, 100.0);
    assert_eq!(scene.rows[0].fraction, 1.0);
    assert_eq!(scene.rows[1].fraction, 0.25);
    assert_eq!(scene.rows[0].label, "Mazda MX-5 Cup");
}

#[test]
fn test_bar_scene_uses_custom_value_format() {
    let entries = vec![BarEntry {
        label: "MX-5".to_string(),
        value: units::from_hours(2.0) as f64,
    }];
    let format = BarFormat {
        value_format: units::format_duration_f64,
        ..Default::default()
    };
    let scene = build_bar_scene(&entries, &format).unwrap();
    assert_eq!(scene.rows[0].value_text, "2h 0m");
}

#[test]
fn test_bar_scene_height_grows_with_rows() {
    let entries: Vec<BarEntry> = (0..30)
        .map(|i| BarEntry {
            label: format!("entry {}", i),
            value: i as f64,
        })
        .collect();
    let scene = build_bar_scene(&entries, &BarFormat::default()).unwrap();
    assert_eq!(scene.chart_height(), 30.0 * scene.row_height);
}

#[test]
fn test_bar_scene_empty_input_yields_none() {
    assert!(build_bar_scene(&[], &BarFormat::default()).is_none());
}

#[test]
fn test_bar_scene_all_zero_values_do_not_divide_by_zero() {
    let entries = vec![BarEntry {
        label: "idle".to_string(),
        value: 0.0,
    }];
    let scene = build_bar_scene(&entries, &BarFormat::default()).unwrap();
    assert_eq!(scene.rows[0].fraction, 0.0);
}

#[test]
fn test_heat_scene_scales_over_occupied_cells() {
    let matrix = vec![
        vec![Some(10.0), None],
        vec![Some(40.0), Some(20.0)],
    ];
    let scene = build_heat_scene(
        matrix,
        vec!["A".to_string(), "B".to_string()],
        vec!["X".to_string(), "Y".to_string()],
        units::format_duration_f64,
    )
    .unwrap();

    assert_eq!(scene.scale.min(), 10.0);
    assert_eq!(scene.scale.max(), 40.0);
    assert_eq!(scene.width(), 2);
    assert_eq!(scene.height(), 2);
}

#[test]
fn test_heat_scene_tooltip_names_both_axes() {
    let matrix = vec![vec![Some(units::from_hours(1.0) as f64)]];
    let scene = build_heat_scene(
        matrix,
        vec!["Mazda MX-5 Cup".to_string()],
        vec!["Okayama Short".to_string()],
        units::format_duration_f64,
    )
    .unwrap();

    assert_eq!(
        scene.tooltip_text(0, 0),
        "Mazda MX-5 Cup @ Okayama Short: 1h 0m"
    );
}

#[test]
fn test_heat_scene_empty_or_unoccupied_yields_none() {
    assert!(build_heat_scene(vec![], vec![], vec![], units::format_duration_f64).is_none());

    let unoccupied = vec![vec![None, None]];
    assert!(build_heat_scene(
        unoccupied,
        vec!["A".to_string()],
        vec!["X".to_string(), "Y".to_string()],
        units::format_duration_f64,
    )
    .is_none());
}
