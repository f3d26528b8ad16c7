use std::time::Duration;

/// Delay between two revealed characters.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(50);

/// Reveals a fixed text one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Advances by one character. Returns `false` once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typewriter_reveals_multibyte_text() {
        let mut writer = Typewriter::new("hé!");
        assert_eq!(writer.visible(), "");
        assert!(writer.tick());
        assert!(writer.tick());
        assert_eq!(writer.visible(), "hé");
        assert!(writer.tick());
        assert!(!writer.tick());
        assert_eq!(writer.visible(), "hé!");
        assert!(writer.is_done());
    }
}
