#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Quietness level.
    ///
    /// `0` prints everything, `1` drops the banner and section headers,
    /// `2` and above only prints outcomes.
    pub quiet: u8,
    /// Suppresses the startup banner regardless of `quiet`.
    pub no_banner: bool,
}

impl Config {
    pub fn shows_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }

    pub fn shows_details(&self) -> bool {
        self.quiet < 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_levels_gate_output() {
        let loud = Config::default();
        assert!(loud.shows_banner());
        assert!(loud.shows_details());

        let no_banner = Config { no_banner: true, ..Config::default() };
        assert!(!no_banner.shows_banner());
        assert!(no_banner.shows_details());

        let q1 = Config { quiet: 1, no_banner: false };
        assert!(!q1.shows_banner());
        assert!(q1.shows_details());

        let q2 = Config { quiet: 2, no_banner: false };
        assert!(!q2.shows_details());
    }
}
