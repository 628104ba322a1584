use super::ConsoleError;

/// Display settings changed with `set <name> <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// List the move guide after a selection.
    pub guide: bool,
    /// Print file and rank labels around the board.
    pub coordinates: bool,
    /// Draw the board from Black's side.
    pub flip: bool,
    /// Figurine glyphs instead of letters.
    pub unicode: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOptions {
    #[must_use]
    pub const fn new() -> Self {
        ConsoleOptions {
            guide: true,
            coordinates: true,
            flip: false,
            unicode: false,
        }
    }

    /// Lines describing every option and its current value.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        [
            ("guide", self.guide),
            ("coordinates", self.coordinates),
            ("flip", self.flip),
            ("unicode", self.unicode),
        ]
        .iter()
        .map(|(name, value)| format!("option {name} = {value}"))
        .collect()
    }

    pub fn apply_set(&mut self, name: &str, value: &str) -> Result<(), ConsoleError> {
        let normalized = name.trim().to_ascii_lowercase();
        let slot = match normalized.as_str() {
            "guide" => &mut self.guide,
            "coordinates" | "coords" => &mut self.coordinates,
            "flip" => &mut self.flip,
            "unicode" => &mut self.unicode,
            _ => return Err(ConsoleError::UnknownOption(name.to_string())),
        };
        *slot = parse_flag(value).ok_or_else(|| ConsoleError::InvalidValue {
            name: normalized.clone(),
            value: value.to_string(),
        })?;
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConsoleOptions::new();
        assert!(options.guide);
        assert!(options.coordinates);
        assert!(!options.flip);
        assert!(!options.unicode);
    }

    #[test]
    fn test_apply_set() {
        let mut options = ConsoleOptions::new();
        options.apply_set("Flip", "on").unwrap();
        options.apply_set("guide", "0").unwrap();
        assert!(options.flip);
        assert!(!options.guide);
    }

    #[test]
    fn test_apply_set_rejects_bad_input() {
        let mut options = ConsoleOptions::new();
        assert_eq!(
            options.apply_set("hash", "16"),
            Err(ConsoleError::UnknownOption("hash".to_string()))
        );
        assert!(matches!(
            options.apply_set("flip", "maybe"),
            Err(ConsoleError::InvalidValue { .. })
        ));
        assert!(!options.flip);
    }
}
