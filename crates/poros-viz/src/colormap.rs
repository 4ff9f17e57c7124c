/// Maps a value in `[0, 1]` to an RGB color on a jet-style colormap
/// (blue through green to red). Values outside the range are clamped.
///
/// # Examples
///
/// ```
/// use poros_viz::colormap::jet;
///
/// assert_eq!(jet(0.0), [0, 0, 128]);
/// assert_eq!(jet(1.0), [128, 0, 0]);
/// ```
pub fn jet(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}
