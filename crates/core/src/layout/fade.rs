//! Opacity ramps for span edges.
//!
//! A ramp is always sampled over its full configured length; truncation
//! keeps a window of those samples, never respacing them. Fade-out keeps
//! the bright head, fade-in keeps the bright tail, so a truncated ramp
//! preserves the full ramp's slope.

use serde::Serialize;

use crate::config::LayoutConfig;

/// One sample of a fade ramp: a slice offset from the caller's base and
/// the opacity to draw there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FadeSample {
    pub offset: i64,
    pub opacity: f32,
}

/// Evenly spaced values from `start` to `end`, inclusive on both ends.
fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n).map(|i| start + step * i as f32).collect()
        }
    }
}

fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

fn samples(window: &[f32]) -> Vec<FadeSample> {
    window
        .iter()
        .enumerate()
        .map(|(i, &opacity)| FadeSample {
            offset: i as i64,
            opacity: round2(opacity),
        })
        .collect()
}

/// Fade-out ramp: `max_opacity` at offset 0, dimming toward
/// `min_opacity` at the configured ramp length.
///
/// When `len` is shorter than the configured ramp only the first `len`
/// samples are kept: truncation drops the dim tail.
pub fn fade_out(config: &LayoutConfig, len: i64) -> Vec<FadeSample> {
    let full = linspace(
        config.max_opacity,
        config.min_opacity,
        config.fade_len_out as usize,
    );
    let keep = len.clamp(0, full.len() as i64) as usize;
    samples(&full[..keep])
}

/// Fade-in ramp: brightening toward `max_opacity` at its last sample.
///
/// When `len` is shorter than the configured ramp only the last `len`
/// samples are kept, so the bright end stays anchored at the span's
/// finish.
pub fn fade_in(config: &LayoutConfig, len: i64) -> Vec<FadeSample> {
    let full = linspace(
        config.min_opacity,
        config.max_opacity,
        config.fade_len_in as usize,
    );
    let keep = len.clamp(0, full.len() as i64) as usize;
    samples(&full[full.len() - keep..])
}

/// Split a two-sided span's duration between its two ramps.
///
/// The fade-in side takes at most half the duration, the fade-out side
/// the remainder, each capped at its configured ramp length. Short
/// spans meet exactly at the midpoint with no gap and no overlap; long
/// spans leave an unrendered gap between the ramps. Returns
/// `(fade_out_len, fade_in_len)`.
pub fn split_durations(config: &LayoutConfig, duration: i64) -> (i64, i64) {
    let duration = duration.max(0);
    let fade_in_len = (duration / 2).min(i64::from(config.fade_len_in));
    let fade_out_len = (duration - fade_in_len).min(i64::from(config.fade_len_out));
    (fade_out_len, fade_in_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn fade_out_is_non_increasing() {
        let ramp = fade_out(&config(), 16);
        assert_eq!(ramp.len(), 16);
        assert_eq!(ramp[0].opacity, 0.9);
        assert_eq!(ramp[15].opacity, 0.0);
        for pair in ramp.windows(2) {
            assert!(pair[0].opacity >= pair[1].opacity);
        }
    }

    #[test]
    fn fade_in_is_non_decreasing() {
        let ramp = fade_in(&config(), 16);
        assert_eq!(ramp.len(), 16);
        assert_eq!(ramp[0].opacity, 0.0);
        assert_eq!(ramp[15].opacity, 0.9);
        for pair in ramp.windows(2) {
            assert!(pair[0].opacity <= pair[1].opacity);
        }
    }

    #[test]
    fn truncated_fade_out_keeps_the_bright_head() {
        let full = fade_out(&config(), 16);
        let short = fade_out(&config(), 5);
        assert_eq!(short.len(), 5);
        assert_eq!(&full[..5], &short[..]);
    }

    #[test]
    fn truncated_fade_in_keeps_the_bright_tail() {
        let full = fade_in(&config(), 16);
        let short = fade_in(&config(), 5);
        assert_eq!(short.len(), 5);
        // Same opacities as the full ramp's last five samples, re-based
        // at offset 0.
        let tail: Vec<f32> = full[11..].iter().map(|s| s.opacity).collect();
        let kept: Vec<f32> = short.iter().map(|s| s.opacity).collect();
        assert_eq!(tail, kept);
        assert_eq!(short[0].offset, 0);
        assert_eq!(short[4].offset, 4);
    }

    #[test]
    fn offsets_count_up_from_zero() {
        let ramp = fade_out(&config(), 3);
        let offsets: Vec<i64> = ramp.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn split_covers_short_durations_exactly() {
        let config = config();
        for duration in 1..=32 {
            let (out_len, in_len) = split_durations(&config, duration);
            assert_eq!(out_len + in_len, duration, "duration={duration}");
        }
    }

    #[test]
    fn split_favors_fade_out_on_odd_durations() {
        let (out_len, in_len) = split_durations(&config(), 5);
        assert_eq!((out_len, in_len), (3, 2));
    }

    #[test]
    fn split_caps_both_sides_for_long_durations() {
        let (out_len, in_len) = split_durations(&config(), 100);
        assert_eq!((out_len, in_len), (16, 16));
    }

    #[test]
    fn one_slice_span_is_a_single_full_opacity_bar() {
        let config = config();
        let (out_len, in_len) = split_durations(&config, 1);
        assert_eq!((out_len, in_len), (1, 0));
        let ramp = fade_out(&config, out_len);
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp[0].opacity, 0.9);
        assert!(fade_in(&config, in_len).is_empty());
    }

    #[test]
    fn even_split_meets_seamlessly_at_the_midpoint() {
        // Equal ramp lengths: the last fade-out sample and the first
        // fade-in sample land on the same opacity.
        let config = config();
        let (out_len, in_len) = split_durations(&config, 8);
        assert_eq!((out_len, in_len), (4, 4));
        let out_ramp = fade_out(&config, out_len);
        let in_ramp = fade_in(&config, in_len);
        let seam_out = out_ramp.last().unwrap().opacity;
        let seam_in = in_ramp.first().unwrap().opacity;
        assert!((seam_out - seam_in).abs() < f32::EPSILON);
    }
}
