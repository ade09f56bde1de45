//! Color temperature control through `sct`.

use anyhow::{Context, Result};

use super::{ColorTemperatureSetter, run_tool};

/// Render a Kelvin value the way `sct` expects it: a whole number.
pub fn format_temperature(temperature: f64) -> String {
    format!("{}", temperature.round() as i64)
}

/// Sets the color temperature by running `sct <kelvin>`.
pub struct SctSetter {
    command: String,
}

impl SctSetter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl ColorTemperatureSetter for SctSetter {
    fn apply(&mut self, temperature: f64) -> Result<()> {
        let kelvin = format_temperature(temperature);
        run_tool(&self.command, &[kelvin.as_str()])
            .with_context(|| format!("Failed to set color temperature to {kelvin}K"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rounds_to_whole_kelvin() {
        assert_eq!(format_temperature(3426.8), "3427");
        assert_eq!(format_temperature(3200.0), "3200");
        assert_eq!(format_temperature(3349.49), "3349");
    }

    #[test]
    fn test_apply_succeeds_when_tool_does() {
        let mut setter = SctSetter::new("true");
        assert!(setter.apply(3426.8).is_ok());
    }

    #[test]
    fn test_apply_surfaces_tool_failure() {
        let mut setter = SctSetter::new("false");
        let err = setter.apply(3300.0).unwrap_err();
        assert!(err.to_string().contains("3300K"));
    }
}
