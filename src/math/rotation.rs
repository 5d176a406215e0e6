//! Rotation of points about the vertical axis in the x/z ground plane
//!
//! Angles are in degrees. The angle is negated before the sine and cosine are taken,
//! so a positive angle turns a point clockwise when viewed from above with x to the
//! right and z up. Forward and inverse rotation share the same convention and undo
//! each other exactly up to floating point rounding.

use num_traits::Float;

/// Rotate `point` about the origin by `degrees`
///
/// Applies `(x, z) -> (cos(r)x - sin(r)z, sin(r)x + cos(r)z)` with `r = -degrees` in radians.
pub fn rotate_xz<F: Float>(point: [F; 2], degrees: F) -> [F; 2] {
    let (sin, cos) = (-degrees.to_radians()).sin_cos();
    [
        cos * point[0] - sin * point[1],
        sin * point[0] + cos * point[1],
    ]
}

/// Undo a rotation of `degrees` previously applied by [`rotate_xz`]
pub fn unrotate_xz<F: Float>(point: [F; 2], degrees: F) -> [F; 2] {
    rotate_xz(point, -degrees)
}

/// Rotate `point` about `pivot` by `degrees`
pub fn rotate_about<F: Float>(point: [F; 2], pivot: [F; 2], degrees: F) -> [F; 2] {
    let rotated = rotate_xz([point[0] - pivot[0], point[1] - pivot[1]], degrees);
    [rotated[0] + pivot[0], rotated[1] + pivot[1]]
}

/// Corners of a `size` rectangle centered on the origin, rotated by `degrees` and moved to `center`
///
/// Corners are returned in winding order starting from the (-x, -z) corner.
pub fn rotated_rect_corners<F: Float>(center: [F; 2], size: [F; 2], degrees: F) -> [[F; 2]; 4] {
    let two = F::one() + F::one();
    let hx = size[0] / two;
    let hz = size[1] / two;

    [[-hx, -hz], [hx, -hz], [hx, hz], [-hx, hz]].map(|corner| {
        let rotated = rotate_xz(corner, degrees);
        [rotated[0] + center[0], rotated[1] + center[1]]
    })
}
