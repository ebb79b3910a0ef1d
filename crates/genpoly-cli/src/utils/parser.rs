use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid axis '{0}'. Expected 3 numbers separated by commas (e.g., '1,0,0').")]
    InvalidAxis(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetValue(String),
}

/// Parses an `x,y,z` triple such as `1,0,0` or `0.0, -1.0, 0.5`.
pub fn parse_axis(s: &str) -> Result<Vector3<f64>, ParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidAxis(s.to_string()));
    }
    let mut xyz = [0.0; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| ParseError::InvalidAxis(s.to_string()))?;
    }
    Ok(Vector3::from(xyz))
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn parse_set_value(s: &str) -> Result<(&str, &str), ParseError> {
    s.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| ParseError::InvalidSetValue(s.to_string()))
}
