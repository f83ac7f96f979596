//! Property-based tests for the security badge renderer
//!
//! These tests verify invariants that should hold for all inputs:
//! - Output is a single well-formed `<svg>` root of fixed size
//! - Rendering is deterministic
//! - Text nodes appear in critical, high, medium, low order
//! - Unknown trends render the stable arrow

use proptest::prelude::*;
use secbadge::render_security_badge;

/// Trend strings, recognized in any case, plus arbitrary noise
fn trend() -> impl Strategy<Value = String> {
    prop_oneof![
        "(?i)up|down|stable",
        "[a-zA-Z ]{0,12}",
    ]
}

fn expected_arrow(trend: &str) -> &'static str {
    match trend.to_lowercase().as_str() {
        "up" => "↑",
        "down" => "↓",
        _ => "→",
    }
}

fn text_nodes(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("badge is well-formed XML");
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect()
}

proptest! {
    #[test]
    fn prop_badge_has_single_fixed_size_root(
        c in any::<i64>(), h in any::<i64>(), m in any::<i64>(), l in any::<i64>(),
        ct in trend(), ht in trend(), mt in trend(), lt in trend(),
    ) {
        let svg = render_security_badge(c, &ct, h, &ht, m, &mt, l, &lt);
        let doc = roxmltree::Document::parse(&svg).unwrap();
        let root = doc.root_element();

        prop_assert!(root.has_tag_name("svg"));
        prop_assert_eq!(root.attribute("width"), Some("350"));
        prop_assert_eq!(root.attribute("height"), Some("20"));
        prop_assert_eq!(svg.matches("<svg").count(), 1);
    }

    #[test]
    fn prop_render_is_deterministic(
        c in any::<i64>(), h in any::<i64>(), m in any::<i64>(), l in any::<i64>(),
        ct in trend(), ht in trend(), mt in trend(), lt in trend(),
    ) {
        let first = render_security_badge(c, &ct, h, &ht, m, &mt, l, &lt);
        let second = render_security_badge(c, &ct, h, &ht, m, &mt, l, &lt);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_text_nodes_follow_level_order(
        c in any::<i64>(), h in any::<i64>(), m in any::<i64>(), l in any::<i64>(),
        ct in trend(), ht in trend(), mt in trend(), lt in trend(),
    ) {
        let svg = render_security_badge(c, &ct, h, &ht, m, &mt, l, &lt);
        let expected = vec![
            "Security Status".to_string(),
            format!("C: {} {}", c, expected_arrow(&ct)),
            format!("H: {} {}", h, expected_arrow(&ht)),
            format!("M: {} {}", m, expected_arrow(&mt)),
            format!("L: {} {}", l, expected_arrow(&lt)),
        ];
        prop_assert_eq!(text_nodes(&svg), expected);
    }
}

#[test]
fn test_sample_scenario_text_nodes() {
    let svg = render_security_badge(10, "up", 20, "down", 30, "stable", 5, "down");
    assert_eq!(
        text_nodes(&svg),
        vec!["Security Status", "C: 10 ↑", "H: 20 ↓", "M: 30 →", "L: 5 ↓"]
    );
}

#[test]
fn test_palette_colors_are_used() {
    let svg = render_security_badge(10, "up", 20, "down", 30, "stable", 5, "down");
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let fills: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect"))
        .filter_map(|n| n.attribute("fill"))
        .collect();

    assert_eq!(
        fills,
        vec![
            "#fff",
            "#555555",
            "#e05d44",
            "url(#smooth)",
            "#fe7d37",
            "#dfb317",
            "#97ca00",
        ]
    );
}

#[test]
fn test_negative_count_and_unknown_trend() {
    let svg = render_security_badge(-1, "up", 0, "sideways", 0, "", 0, "STABLE");
    let nodes = text_nodes(&svg);
    assert_eq!(nodes[1], "C: -1 ↑");
    assert_eq!(nodes[2], "H: 0 →");
    assert_eq!(nodes[3], "M: 0 →");
    assert_eq!(nodes[4], "L: 0 →");
}
