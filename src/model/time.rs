use super::error::BeatmapError;

/// Parse a beatmap timestamp of the form `MM:SS:mmm` into milliseconds.
///
/// The fields are not range-limited beyond being non-negative integers,
/// so `00:90:000` is a valid 90 seconds.
pub fn parse_timestamp(text: &str) -> Result<f64, BeatmapError> {
    let invalid = || BeatmapError::InvalidTimestamp(text.to_string());

    let parts: Vec<&str> = text.split(':').collect();
    let [minutes, seconds, millis] = parts.as_slice() else {
        return Err(invalid());
    };

    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
    let millis: u64 = millis.parse().map_err(|_| invalid())?;

    Ok((minutes * 60_000 + seconds * 1_000 + millis) as f64)
}
