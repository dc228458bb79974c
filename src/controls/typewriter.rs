use std::time::Duration;

pub const TYPEWRITER_DELAY: Duration = Duration::from_millis(150);

/// Reveals `text` one character per tick, then stays complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    len: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            delay,
            len: 0,
            total,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn target(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.len == self.total
    }

    /// Advance by one character. Returns false once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.len += 1;
        true
    }

    /// Restart from an empty prefix if the target or delay changed.
    pub fn retarget(&mut self, text: &str, delay: Duration) {
        if self.text != text || self.delay != delay {
            *self = Self::new(text, delay);
        }
    }

    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.len)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper that ticks until the typewriter refuses, counting advances
    fn run_to_end(tw: &mut Typewriter) -> usize {
        let mut ticks = 0;
        while tw.tick() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_exact_tick_count() {
        let mut tw = Typewriter::new("MERN Stack Developer", TYPEWRITER_DELAY);
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_done());

        let ticks = run_to_end(&mut tw);
        assert_eq!(ticks, 20);
        assert_eq!(tw.visible(), "MERN Stack Developer");
        assert!(tw.is_done());

        // terminal state
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "MERN Stack Developer");
    }

    #[test]
    fn test_prefix_grows_one_char() {
        let mut tw = Typewriter::new("abc", Duration::from_millis(10));
        tw.tick();
        assert_eq!(tw.visible(), "a");
        tw.tick();
        assert_eq!(tw.visible(), "ab");
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("héllo ✨", Duration::from_millis(1));
        assert_eq!(run_to_end(&mut tw), 7);
        assert_eq!(tw.visible(), "héllo ✨");

        let mut tw = Typewriter::new("✨x", Duration::from_millis(1));
        tw.tick();
        assert_eq!(tw.visible(), "✨");
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut tw = Typewriter::new("", TYPEWRITER_DELAY);
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_retarget() {
        let mut tw = Typewriter::new("first", TYPEWRITER_DELAY);
        tw.tick();
        tw.tick();

        // same target keeps progress
        tw.retarget("first", TYPEWRITER_DELAY);
        assert_eq!(tw.visible(), "fi");

        tw.retarget("second", TYPEWRITER_DELAY);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.target(), "second");

        tw.tick();
        tw.retarget("second", Duration::from_millis(5));
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.delay(), Duration::from_millis(5));
    }
}
