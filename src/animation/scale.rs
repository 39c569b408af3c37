// src/animation/scale.rs
//
// Progress partition math. A node carries a single progress scalar in
// [0, 1]; divide_scale splits it into per-part sub-scales, and the
// mirror helpers pick the per-tick increment for the current phase of
// a step.

/// Clamps `scale` to the sub-range owned by part `i` of `n` equal
/// partitions, rescaled to [0, 1].
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let unit = 1.0 / n as f32;
    (scale - i as f32 * unit).max(0.0).min(unit) * n as f32
}

/// Which side of the phase boundary `scale` sits on: 0 below `sc_div`,
/// 1 above it. The quotient is computed in f64 end to end.
pub fn phase_index(scale: f32, sc_div: f64) -> f32 {
    (scale as f64 / sc_div).floor() as f32
}

/// Blend of 1/a and 1/b selected by the phase of `scale`.
pub fn mirror_value(scale: f32, a: usize, b: usize, sc_div: f64) -> f32 {
    let k = phase_index(scale, sc_div);
    (1.0 - k) / a as f32 + k / b as f32
}

/// Per-tick progress increment: the phase-selected unit, signed by
/// `dir` and scaled by the gap constant.
pub fn update_value(scale: f32, dir: f32, a: usize, b: usize, sc_gap: f32, sc_div: f64) -> f32 {
    mirror_value(scale, a, b, sc_div) * dir * sc_gap
}
