use std::fmt;
use std::num::ParseFloatError;

use common::Segment;

#[derive(Debug)]
pub enum OffsetsError {
    Dx { input: String, error: ParseFloatError, },
    Dy { input: String, error: ParseFloatError, },
}

impl fmt::Display for OffsetsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &OffsetsError::Dx { ref input, ref error, } =>
                write!(f, "Enter numbers (X shift {:?}: {}).", input, error),
            &OffsetsError::Dy { ref input, ref error, } =>
                write!(f, "Enter numbers (Y shift {:?}: {}).", input, error),
        }
    }
}

pub fn parse_offsets(dx: &str, dy: &str) -> Result<(f64, f64), OffsetsError> {
    let dx_value = dx.trim().parse()
        .map_err(|error| OffsetsError::Dx { input: dx.to_string(), error, })?;
    let dy_value = dy.trim().parse()
        .map_err(|error| OffsetsError::Dy { input: dy.to_string(), error, })?;
    Ok((dx_value, dy_value))
}

pub fn translate_all(segments: &mut [Segment], dx: f64, dy: f64) {
    for segment in segments.iter_mut() {
        segment.translate(dx, dy);
    }
}
