//! Human-readable error reporting for front-ends.

use crate::error::SimError;

/// Format a simulation error, with a hint for the fields a user can fix.
pub fn format_error(error: &SimError) -> String {
    let mut msg = format!("Simulation error: {}", error);

    match error {
        SimError::InvalidParameter { name, .. } => {
            msg.push_str(&format!("\n  hint: adjust `{}` before starting the run", name));
        }
        SimError::ShapeMismatch { expected, .. } => {
            msg.push_str(&format!(
                "\n  hint: supply exactly {} positions and {} velocities",
                expected, expected
            ));
        }
        SimError::NonFinite { .. } | SimError::Json(_) => {}
    }

    msg
}

/// Format any other error raised around a run (I/O, config parsing).
pub fn format_runtime_error(error: &dyn std::error::Error) -> String {
    format!("Runtime error: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_gets_hint() {
        let msg = format_error(&SimError::invalid("domain_size", "must be finite and > 0"));
        assert!(msg.starts_with("Simulation error"));
        assert!(msg.contains("hint: adjust `domain_size`"));
    }
}
