//! Property-based invariant tests for tinct-color.
//!
//! These hold for **any** valid input:
//!
//! 1. Contrast ratio is symmetric and lies in [1, 21].
//! 2. Relative luminance lies in [0, 1].
//! 3. Formatting then parsing hex is lossless.
//! 4. Shorthand hex expands by digit duplication.
//! 5. sRGB → OKLCH → sRGB reproduces the input channels.
//! 6. OKLCH output is always in range, with hue 0 for achromatic colors.
//! 7. Interpolation hits both endpoints and clamps `t`.
//! 8. Adjustment is bounded and meets the target unless it falls back.
//! 9. The reported adjustment ratio matches a fresh contrast check.
//! 10. Variations always produce an AA-compliant base.
//! 11. Compliance classification agrees with `meets_wcag`.

use proptest::prelude::*;
use tinct_color::{
    ComplianceLevel, LuminanceCache, Oklch, Rgb, Strategy as AdjustStrategy, TextSize,
    WcagLevel, adjust_color_for_contrast_with, calculate_contrast, contrast_ratio,
    generate_accessible_variations_with, hex_to_rgb, interpolate_oklch, meets_wcag,
    oklch_to_rgb, relative_luminance, rgb_to_hex, rgb_to_oklch, wcag_compliance,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn hex_strategy() -> impl Strategy<Value = String> {
    rgb_strategy().prop_map(rgb_to_hex)
}

fn level_strategy() -> impl Strategy<Value = WcagLevel> {
    prop_oneof![Just(WcagLevel::Aa), Just(WcagLevel::Aaa)]
}

fn size_strategy() -> impl Strategy<Value = TextSize> {
    prop_oneof![Just(TextSize::Normal), Just(TextSize::Large)]
}

fn oklch_strategy() -> impl Strategy<Value = Oklch> {
    (0.0f64..=1.0, 0.0f64..=0.4, 0.0f64..360.0).prop_map(|(l, c, h)| Oklch::new(l, c, h))
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn channel_diff(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Contrast and luminance ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_is_symmetric_and_bounded(a in hex_strategy(), b in hex_strategy()) {
        let ab = calculate_contrast(&a, &b).unwrap();
        let ba = calculate_contrast(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!(ab >= 1.0);
        prop_assert!(ab <= 21.0 + 1e-9);
    }

    #[test]
    fn identical_colors_have_unit_contrast(a in hex_strategy()) {
        let ratio = calculate_contrast(&a, &a).unwrap();
        prop_assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn luminance_is_unit_interval(a in hex_strategy()) {
        let lum = relative_luminance(&a).unwrap();
        prop_assert!((0.0..=1.0 + 1e-12).contains(&lum));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Hex parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_format_parse_is_lossless(rgb in rgb_strategy()) {
        let hex = rgb_to_hex(rgb);
        prop_assert_eq!(hex_to_rgb(&hex).unwrap(), rgb);
        prop_assert_eq!(hex_to_rgb(&hex.to_ascii_uppercase()).unwrap(), rgb);
    }

    #[test]
    fn shorthand_expands_by_duplication(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:x}{g:X}{b:x}");
        let rgb = hex_to_rgb(&short).unwrap();
        prop_assert_eq!(rgb, Rgb::new(r * 17, g * 17, b * 17));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5–7. OKLCH
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn oklch_round_trip_preserves_channels(rgb in rgb_strategy()) {
        let back = oklch_to_rgb(rgb_to_oklch(rgb));
        prop_assert!(channel_diff(rgb, back) <= 1, "{:?} -> {:?}", rgb, back);
    }

    #[test]
    fn oklch_components_in_range(rgb in rgb_strategy()) {
        let oklch = rgb_to_oklch(rgb);
        prop_assert!(oklch.l > -1e-9 && oklch.l < 1.0 + 1e-9);
        prop_assert!(oklch.c >= 0.0);
        prop_assert!((0.0..360.0).contains(&oklch.h));
        if oklch.is_achromatic() {
            prop_assert_eq!(oklch.h, 0.0);
        }
    }

    #[test]
    fn grays_are_achromatic(v in any::<u8>()) {
        prop_assert!(rgb_to_oklch(Rgb::new(v, v, v)).is_achromatic());
    }

    #[test]
    fn interpolation_hits_endpoints(from in oklch_strategy(), to in oklch_strategy()) {
        let start = interpolate_oklch(from, to, 0.0);
        let end = interpolate_oklch(from, to, 1.0);
        prop_assert!((start.l - from.l).abs() < 1e-9);
        prop_assert!((start.c - from.c).abs() < 1e-9);
        prop_assert!(hue_distance(start.h, from.h) < 1e-9);
        prop_assert!((end.l - to.l).abs() < 1e-9);
        prop_assert!((end.c - to.c).abs() < 1e-9);
        prop_assert!(hue_distance(end.h, to.h) < 1e-9);
    }

    #[test]
    fn interpolation_clamps_t(from in oklch_strategy(), to in oklch_strategy(), over in 1.0f64..100.0) {
        prop_assert_eq!(interpolate_oklch(from, to, over), interpolate_oklch(from, to, 1.0));
        prop_assert_eq!(interpolate_oklch(from, to, -over), interpolate_oklch(from, to, 0.0));
    }

    #[test]
    fn interpolated_hue_stays_on_short_arc(from in oklch_strategy(), to in oklch_strategy(), t in 0.0f64..=1.0) {
        let mid = interpolate_oklch(from, to, t);
        let span = hue_distance(from.h, to.h);
        prop_assert!((0.0..360.0).contains(&mid.h));
        prop_assert!(hue_distance(mid.h, from.h) <= span + 1e-9);
        prop_assert!(hue_distance(mid.h, to.h) <= span + 1e-9);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8–10. Adjustment and variations
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn adjustment_is_bounded_and_meets_target(
        fg in hex_strategy(),
        bg in hex_strategy(),
        level in level_strategy(),
        size in size_strategy(),
    ) {
        let cache = LuminanceCache::new();
        let result = adjust_color_for_contrast_with(&cache, &fg, &bg, level, size).unwrap();
        prop_assert!(result.iterations < 50);
        prop_assert_eq!(&result.original, &fg);

        match result.strategy {
            AdjustStrategy::Fallback => {
                prop_assert!(result.adjusted == "#000000" || result.adjusted == "#ffffff");
            }
            AdjustStrategy::Lightness | AdjustStrategy::Chroma => {
                prop_assert!(result.ratio >= level.min_ratio(size));
            }
        }
    }

    #[test]
    fn reported_ratio_matches_contrast(
        fg in hex_strategy(),
        bg in hex_strategy(),
        level in level_strategy(),
    ) {
        let cache = LuminanceCache::new();
        let result = adjust_color_for_contrast_with(&cache, &fg, &bg, level, TextSize::Normal).unwrap();
        let fresh = cache.contrast(&result.adjusted, &bg).unwrap();
        prop_assert!((result.ratio - fresh).abs() < 1e-9);
    }

    #[test]
    fn variation_base_is_always_aa(base in hex_strategy(), bg in hex_strategy()) {
        let cache = LuminanceCache::new();
        let v = generate_accessible_variations_with(&cache, &base, &bg).unwrap();
        prop_assert!(cache.contrast(&v.base, &bg).unwrap() >= 4.5);
        prop_assert!(v.text == "#000000" || v.text == "#ffffff");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. Compliance classification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn compliance_agrees_with_thresholds(l1 in 0.0f64..=1.0, l2 in 0.0f64..=1.0, size in size_strategy()) {
        let ratio = contrast_ratio(l1, l2);
        let report = wcag_compliance(ratio, size);
        prop_assert_eq!(report.aa, meets_wcag(ratio, WcagLevel::Aa, size));
        prop_assert_eq!(report.aaa, meets_wcag(ratio, WcagLevel::Aaa, size));
        let expected = if report.aaa {
            ComplianceLevel::Aaa
        } else if report.aa {
            ComplianceLevel::Aa
        } else {
            ComplianceLevel::Fail
        };
        prop_assert_eq!(report.level, expected);
    }
}
