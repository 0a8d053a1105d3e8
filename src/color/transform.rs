//! sRGB transfer function and the Wide RGB D65 <-> CIE XYZ matrices used
//! by Hue lights.

/// Linear Wide RGB D65 to XYZ, row major
pub const RGB_TO_XYZ: [f64; 9] = [
    0.664511, 0.154324, 0.162028, //
    0.283881, 0.668433, 0.047685, //
    0.000088, 0.072310, 0.986039,
];

/// XYZ to linear Wide RGB D65, row major
pub const XYZ_TO_RGB: [f64; 9] = [
    1.656492, -0.354851, -0.255038, //
    -0.707196, 1.655397, 0.036152, //
    0.051713, -0.121364, 1.011530,
];

#[inline]
pub fn matmul3vec(a: &[f64; 9], b: &[f64; 3]) -> [f64; 3] {
    [
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2],
        a[3] * b[0] + a[4] * b[1] + a[5] * b[2],
        a[6] * b[0] + a[7] * b[1] + a[8] * b[2],
    ]
}

/// Encoded sRGB value to linear light
#[inline]
pub fn gamma_decode(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Linear light to encoded sRGB value
#[inline]
pub fn gamma_encode(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Encoded RGB, each channel 0.0 - 1.0, to XYZ
pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    matmul3vec(&RGB_TO_XYZ, &rgb.map(gamma_decode))
}

/// XYZ to encoded RGB. Channels are not limited to 0.0 - 1.0.
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    matmul3vec(&XYZ_TO_RGB, &xyz).map(gamma_encode)
}

/// Rounding used for all 8-bit values, halves round down
#[inline]
pub fn to_u8(c: f64) -> u8 {
    (c * 255.0 - 0.5).ceil().clamp(0.0, 255.0) as u8
}
