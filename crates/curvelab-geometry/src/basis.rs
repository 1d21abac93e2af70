//! Cubic blending functions.
//!
//! Each function returns the four weights applied, in order, to the four
//! inputs of a segment. The `*_derivs` variants return the derivatives of the
//! same weights with respect to `t`.

/// Hermite weights for `[p0, p1, tangent0, tangent1]`.
pub fn hermite(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        1.0 - 3.0 * t2 + 2.0 * t3,
        t2 * (3.0 - 2.0 * t),
        t * (t - 1.0) * (t - 1.0),
        t2 * (t - 1.0),
    ]
}

pub fn hermite_derivs(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        6.0 * t2 - 6.0 * t,
        6.0 * t - 6.0 * t2,
        3.0 * t2 - 4.0 * t + 1.0,
        3.0 * t2 - 2.0 * t,
    ]
}

/// Bernstein weights of a cubic Bezier.
pub fn bezier(t: f64) -> [f64; 4] {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    [uu * u, 3.0 * uu * t, 3.0 * u * tt, tt * t]
}

pub fn bezier_derivs(t: f64) -> [f64; 4] {
    let u = 1.0 - t;
    [
        -3.0 * u * u,
        3.0 * u * u - 6.0 * u * t,
        6.0 * u * t - 3.0 * t * t,
        3.0 * t * t,
    ]
}

/// Uniform Catmull-Rom weights (tension 0.5).
pub fn catmull_rom(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        0.5 * (-t3 + 2.0 * t2 - t),
        0.5 * (3.0 * t3 - 5.0 * t2 + 2.0),
        0.5 * (-3.0 * t3 + 4.0 * t2 + t),
        0.5 * (t3 - t2),
    ]
}

pub fn catmull_rom_derivs(t: f64) -> [f64; 4] {
    let t2 = t * t;
    [
        0.5 * (-3.0 * t2 + 4.0 * t - 1.0),
        0.5 * (9.0 * t2 - 10.0 * t),
        0.5 * (-9.0 * t2 + 8.0 * t + 1.0),
        0.5 * (3.0 * t2 - 2.0 * t),
    ]
}

/// Uniform cubic B-spline weights.
pub fn uniform_bspline(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let u = 1.0 - t;
    [
        u * u * u / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

pub fn uniform_bspline_derivs(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let u = 1.0 - t;
    [
        -0.5 * u * u,
        (9.0 * t2 - 12.0 * t) / 6.0,
        (-9.0 * t2 + 6.0 * t + 3.0) / 6.0,
        0.5 * t2,
    ]
}
