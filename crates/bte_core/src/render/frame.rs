//! Frame-rate dependent mark-in computation.

/// Rounded rates the host reports for some fractional frame rates.
///
/// The host's timeline metadata floors most fractional rates (59.94 comes
/// back as "59", 29.97 as "29") but reports the 23.976 family at full
/// precision, so 23 is only ever seen as a floored 23.976 and belongs in
/// this table too.
pub const UNDER_REPORTED_RATES: [i64; 6] = [23, 29, 47, 59, 95, 119];

/// Frame number of the one-hour mark for a timeline at `frame_rate`.
///
/// Rounds the rate to whole frames per second, bumping rates from
/// [`UNDER_REPORTED_RATES`] up to the integer rate they stand in for, then
/// multiplies out one hour. Setting the render mark-in to this frame skips a
/// leading one-hour slate segment.
pub fn slate_mark_in(frame_rate: f64) -> i64 {
    let mut fps = frame_rate.round() as i64;
    if UNDER_REPORTED_RATES.contains(&fps) {
        fps += 1;
    }
    fps * 60 * 60
}
