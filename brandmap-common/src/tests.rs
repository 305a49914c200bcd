#[cfg(test)]
mod tests {
    use crate::*;

    fn record(name: &str, shares: (f64, f64, f64), volumes: (f64, f64, f64)) -> StateRecord {
        StateRecord {
            name: name.to_string(),
            pepsi: shares.0,
            coca_cola: shares.1,
            others: shares.2,
            pepsi_volume: volumes.0,
            cola_volume: volumes.1,
            others_volume: volumes.2,
        }
    }

    fn data(entries: Vec<(&str, StateRecord)>) -> MarketData {
        entries
            .into_iter()
            .map(|(key, record)| (key.to_string(), record))
            .collect()
    }

    #[test]
    fn test_record_deserializes_source_field_names() {
        let json = r#"{
            "name": "Jalisco",
            "pepsi": 35.5,
            "cocaCola": 55,
            "others": 9.5,
            "pepsiVolume": 120.4,
            "colaVolume": 188.1,
            "othersVolume": 32
        }"#;
        let parsed: StateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "Jalisco");
        assert_eq!(parsed.coca_cola, 55.0);
        assert_eq!(parsed.others_volume, 32.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"name": "Colima", "pepsi": 50, "cocaCola": 40, "others": 10,
            "pepsiVolume": 1, "colaVolume": 2}"#;
        let err = serde_json::from_str::<StateRecord>(json).unwrap_err();
        assert!(err.to_string().contains("othersVolume"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let bad_share = record("Sonora", (120.0, 0.0, 0.0), (1.0, 1.0, 1.0));
        assert_eq!(
            bad_share.validate(),
            Err(RecordError::ShareOutOfRange {
                brand: Brand::Pepsi,
                value: 120.0
            })
        );

        let bad_volume = record("Sonora", (50.0, 40.0, 10.0), (1.0, -3.0, 1.0));
        assert!(matches!(
            bad_volume.validate(),
            Err(RecordError::InvalidVolume {
                brand: Brand::CocaCola,
                ..
            })
        ));

        let unnamed = record("  ", (50.0, 40.0, 10.0), (1.0, 1.0, 1.0));
        assert_eq!(unnamed.validate(), Err(RecordError::EmptyName));
    }

    #[test]
    fn test_market_data_keeps_document_order() {
        let json = r#"{
            "mx-zt": {"name": "Zacatecas", "pepsi": 1, "cocaCola": 2, "others": 3, "pepsiVolume": 1, "colaVolume": 1, "othersVolume": 1},
            "mx-ag": {"name": "Aguascalientes", "pepsi": 1, "cocaCola": 2, "others": 3, "pepsiVolume": 1, "colaVolume": 1, "othersVolume": 1},
            "mx-bc": {"name": "Baja California", "pepsi": 1, "cocaCola": 2, "others": 3, "pepsiVolume": 1, "colaVolume": 1, "othersVolume": 1}
        }"#;
        let parsed: MarketData = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = parsed.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["mx-zt", "mx-ag", "mx-bc"]);
        assert_eq!(parsed.get("mx-ag").map(|r| r.name.as_str()), Some("Aguascalientes"));
        assert!(parsed.get("mx-xx").is_none());
    }

    #[test]
    fn test_dominant_tie_prefers_pepsi_then_cola() {
        let tie = record("Tie", (40.0, 40.0, 20.0), (1.0, 1.0, 1.0));
        assert_eq!(tie.dominant(), (Brand::Pepsi, 40.0));

        let cola_others = record("Tie", (10.0, 45.0, 45.0), (1.0, 1.0, 1.0));
        assert_eq!(cola_others.dominant(), (Brand::CocaCola, 45.0));

        let others = record("Others", (10.0, 20.0, 70.0), (1.0, 1.0, 1.0));
        assert_eq!(others.dominant(), (Brand::Others, 70.0));
    }

    #[test]
    fn test_region_colors_one_per_record_in_order() {
        let market = data(vec![
            ("mx-ag", record("Aguascalientes", (40.0, 40.0, 20.0), (1.0, 1.0, 1.0))),
            ("mx-3622", record("Aggregate", (10.0, 80.0, 10.0), (1.0, 1.0, 1.0))),
            ("mx-oa", record("Oaxaca", (20.0, 30.0, 50.0), (1.0, 1.0, 1.0))),
        ]);
        let colors = to_region_colors(&market);

        assert_eq!(colors.len(), market.len());
        assert_eq!(colors[0].region_key, "mx-ag");
        assert_eq!(colors[0].color, Brand::Pepsi.color());
        assert_eq!(colors[0].value, 40.0);
        assert_eq!(colors[1].region_key, "mx-3622");
        assert_eq!(colors[1].color, Brand::CocaCola.color());
        assert_eq!(colors[2].brand, Brand::Others);
    }

    #[test]
    fn test_aggregate_keys() {
        assert!(is_aggregate_key("mx-3622"));
        assert!(!is_aggregate_key("mx-ag"));
        assert!(!is_aggregate_key("mx-"));
        assert!(!is_aggregate_key("mx"));
        assert!(!is_aggregate_key("mx-1a"));
        assert_eq!(region_label("mx-ag").as_deref(), Some("AG"));
        assert_eq!(region_label("mx-3622"), None);
    }

    #[test]
    fn test_rankings_exclude_numeric_keys() {
        let market = data(vec![
            ("mx-ag", record("Aguascalientes", (60.0, 30.0, 10.0), (10.0, 4.0, 1.0))),
            ("mx-3622", record("Aggregate", (33.0, 33.0, 34.0), (500.0, 500.0, 500.0))),
        ]);
        let rankings = to_rankings(&market);
        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].region_key, "mx-ag");
        assert_eq!(rankings[0].label, "Aguascalientes (AG)");
    }

    #[test]
    fn test_rankings_sorted_descending_and_stable() {
        let market = data(vec![
            ("mx-a", record("A", (1.0, 1.0, 1.0), (5.0, 0.0, 0.0))),
            ("mx-b", record("B", (1.0, 1.0, 1.0), (2.0, 3.0, 0.0))),
            ("mx-c", record("C", (1.0, 1.0, 1.0), (20.0, 0.0, 0.0))),
            ("mx-d", record("D", (1.0, 1.0, 1.0), (0.0, 0.0, 5.0))),
            ("mx-e", record("E", (1.0, 1.0, 1.0), (1.0, 0.0, 0.0))),
        ]);
        let rankings = to_rankings(&market);

        for pair in rankings.windows(2) {
            assert!(pair[0].total_volume >= pair[1].total_volume);
        }
        let names: Vec<&str> = rankings.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B", "D", "E"]);
    }

    #[test]
    fn test_tooltip_total_has_one_decimal() {
        let rec = record("Puebla", (50.0, 40.0, 10.0), (12.34, 5.0, 2.26));
        let content = build_tooltip(&rec, None);
        assert_eq!(content.total_volume_label, "19.6M units");
        assert!((content.total_volume - 19.6).abs() < 1e-9);

        let whole = record("Puebla", (50.0, 40.0, 10.0), (10.0, 4.0, 1.0));
        assert_eq!(build_tooltip(&whole, None).total_volume_label, "15.0M units");
    }

    #[test]
    fn test_tooltip_total_rounds_halves_up() {
        let quarter = record("Jalisco", (40.0, 50.0, 10.0), (10.25, 9.0, 0.0));
        assert_eq!(build_tooltip(&quarter, None).total_volume_label, "19.3M units");

        let small = record("Colima", (40.0, 50.0, 10.0), (0.75, 1.5, 0.0));
        assert_eq!(build_tooltip(&small, None).total_volume_label, "2.3M units");

        assert_eq!(tooltip::format_total_volume(0.05), "0.1M units");
        assert_eq!(tooltip::format_total_volume(7.0), "7.0M units");
    }

    #[test]
    fn test_tooltip_rows_and_flag() {
        let rec = record("Aguascalientes", (60.0, 30.0, 10.0), (10.0, 4.5, 1.0));
        let content = build_tooltip(&rec, Some("https://flags.example/ag.png"));

        assert_eq!(content.title, "Aguascalientes");
        assert_eq!(content.flag_url.as_deref(), Some("https://flags.example/ag.png"));
        assert_eq!(content.dominant, Brand::Pepsi);
        assert_eq!(content.dominant_label, "Pepsi");
        assert_eq!(content.rows[0].share_label, "60%");
        assert_eq!(content.rows[0].bar_width, "60%");
        assert_eq!(content.rows[1].label, "Coca-Cola");
        assert_eq!(content.rows[1].volume_label, "4.5M units");
        assert_eq!(content.rows[2].brand, Brand::Others);
    }

    #[test]
    fn test_tooltip_flag_miss_is_not_an_error() {
        let rec = record("Tabasco", (20.0, 70.0, 10.0), (1.0, 1.0, 1.0));
        let flags: FlagTable = [("Jalisco".to_string(), "j.png".to_string())]
            .into_iter()
            .collect();

        assert!(build_tooltip(&rec, flags.lookup(&rec.name)).flag_url.is_none());
        assert!(build_tooltip(&rec, Some("")).flag_url.is_none());
    }

    #[test]
    fn test_placement_flips_at_right_and_bottom_edges() {
        let viewport = Viewport::new(1024.0, 768.0);
        let size = Size::new(240.0, 260.0);

        let origin = place_tooltip(Point::new(1000.0, 700.0), size, viewport);
        assert!(origin.x + size.width <= viewport.width);
        assert!(origin.y + size.height <= viewport.height);
        assert_eq!(origin.x, 1000.0 - CURSOR_OFFSET - size.width);
        assert_eq!(origin.y, 700.0 - CURSOR_OFFSET - size.height);

        let origin = place_tooltip(Point::new(100.0, 100.0), size, viewport);
        assert_eq!(origin, Point::new(115.0, 115.0));
    }

    #[test]
    fn test_placement_never_crosses_edges_when_it_fits() {
        let viewport = Viewport::new(400.0, 300.0);
        let size = Size::new(240.0, 260.0);
        let mut x = 0.0;
        while x <= viewport.width {
            let mut y = 0.0;
            while y <= viewport.height {
                let origin = place_tooltip(Point::new(x, y), size, viewport);
                assert!(origin.x >= 0.0 && origin.x + size.width <= viewport.width, "x={x}");
                assert!(origin.y >= 0.0 && origin.y + size.height <= viewport.height, "y={y}");
                y += 10.0;
            }
            x += 10.0;
        }
    }

    #[test]
    fn test_ranking_chart_height_has_floor() {
        assert_eq!(ranking_chart_height(0), 500);
        assert_eq!(ranking_chart_height(10), 500);
        assert_eq!(ranking_chart_height(32), 1024);
    }

    #[test]
    fn test_map_options_suppress_numeric_labels() {
        let market = data(vec![
            ("mx-ag", record("Aguascalientes", (60.0, 30.0, 10.0), (10.0, 4.0, 1.0))),
            ("mx-3622", record("Aggregate", (20.0, 70.0, 10.0), (1.0, 1.0, 1.0))),
        ]);
        let topology = serde_json::json!({ "type": "Topology" });
        let options = map_options(&to_region_colors(&market), &topology, &ChartTheme::default());

        assert_eq!(options["chart"]["map"], topology);
        assert_eq!(options["tooltip"]["enabled"], false);
        let points = options["series"][0]["data"].as_array().unwrap();
        assert_eq!(points[0]["hc-key"], "mx-ag");
        assert_eq!(points[0]["label"], "AG");
        assert_eq!(points[0]["color"], Brand::Pepsi.color());
        assert_eq!(points[1]["label"], "");
    }

    #[test]
    fn test_ranking_options_carry_keys_and_height() {
        let market = data(vec![
            ("mx-ag", record("Aguascalientes", (60.0, 30.0, 10.0), (10.0, 4.0, 1.0))),
            ("mx-bc", record("Baja California", (20.0, 70.0, 10.0), (5.0, 20.0, 3.0))),
        ]);
        let options = ranking_options(&to_rankings(&market), &ChartTheme::default());

        assert_eq!(options["chart"]["height"], 500);
        let points = options["series"][0]["data"].as_array().unwrap();
        assert_eq!(points[0]["regionKey"], "mx-bc");
        assert_eq!(points[0]["y"], 28.0);
        assert_eq!(points[1]["name"], "Aguascalientes (AG)");
    }
}
