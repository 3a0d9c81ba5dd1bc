/// Options of a single validation run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Require void elements to be written with a self-closing slash,
    /// e.g. `<br/>` or `<br />` instead of `<br>`.
    ///
    /// ### Default
    ///
    /// `false`.
    pub strict_self_closing_tags: bool,
}

impl Settings {
    #[inline]
    pub const fn new() -> Self {
        Settings {
            strict_self_closing_tags: false,
        }
    }

    #[inline]
    pub const fn strict_self_closing_tags(mut self, strict: bool) -> Self {
        self.strict_self_closing_tags = strict;

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Settings::new(), Settings::default());
        assert!(!Settings::default().strict_self_closing_tags);
    }

    #[test]
    fn builder() {
        let settings = Settings::new().strict_self_closing_tags(true);

        assert!(settings.strict_self_closing_tags);
        assert!(!settings.strict_self_closing_tags(false).strict_self_closing_tags);
    }
}
