/// Plain example queries.
pub const PLAIN_EXAMPLES: &[&str] = &[
    "F = ma",
    "chain rule",
    "#503",
    "sin(x)^2",
    "pythagoras",
    "euler",
    "physics",
    "calculus",
    "E = 1/2 mv^2",
];

/// Example patterns shown in regex mode.
pub const REGEX_EXAMPLES: &[&str] = &[
    r"^F = .*",
    r"^.* = hf$",
    r"a .{1,2} b",
    r"(sin|cos|tan)\(x\)\^2",
    r".*",
    r"[a-f] + [g-z]",
    r"euler|py(thagoras)?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamplePool {
    Plain,
    Regex,
}

impl ExamplePool {
    pub fn for_regex_mode(regex: bool) -> Self {
        if regex {
            ExamplePool::Regex
        } else {
            ExamplePool::Plain
        }
    }

    pub fn examples(self) -> &'static [&'static str] {
        match self {
            ExamplePool::Plain => PLAIN_EXAMPLES,
            ExamplePool::Regex => REGEX_EXAMPLES,
        }
    }

    pub fn len(self) -> usize {
        self.examples().len()
    }

    pub fn is_empty(self) -> bool {
        self.examples().is_empty()
    }

    /// Index `floor(r * len)` for `r` in `[0, 1)`, clamped to the last entry.
    pub fn index_for(self, r: f64) -> usize {
        let len = self.len();
        // NaN and negatives saturate to 0.
        let index = (r * len as f64).floor() as usize;
        index.min(len - 1)
    }

    pub fn choose(self, r: f64) -> &'static str {
        self.examples()[self.index_for(r)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_sizes() {
        assert_eq!(ExamplePool::Plain.len(), 9);
        assert_eq!(ExamplePool::Regex.len(), 7);
        assert!(!ExamplePool::Regex.is_empty());
    }

    #[test]
    fn bounds_of_the_unit_interval() {
        assert_eq!(ExamplePool::Plain.choose(0.0), "F = ma");
        assert_eq!(ExamplePool::Plain.choose(0.999_999_999), "E = 1/2 mv^2");
        assert_eq!(ExamplePool::Regex.choose(0.0), "^F = .*");
        assert_eq!(ExamplePool::Regex.choose(1.0 - f64::EPSILON), "euler|py(thagoras)?");
    }

    #[test]
    fn out_of_range_randoms_stay_in_pool() {
        assert_eq!(ExamplePool::Regex.index_for(1.0), 6);
        assert_eq!(ExamplePool::Regex.index_for(-0.5), 0);
        assert_eq!(ExamplePool::Plain.index_for(f64::NAN), 0);
    }

    #[test]
    fn trig_example_escapes_brackets_once() -> Result<(), regex::Error> {
        assert_eq!(REGEX_EXAMPLES[3], "(sin|cos|tan)\\(x\\)\\^2");
        assert_eq!(REGEX_EXAMPLES[3].matches('\\').count(), 3);

        let re = regex::Regex::new(REGEX_EXAMPLES[3])?;
        assert!(re.is_match("sin(x)^2"));
        assert!(re.is_match("tan(x)^2 + 1 = sec(x)^2"));
        assert!(!re.is_match("sin(y)^2"));
        Ok(())
    }

    #[test]
    fn every_regex_example_finds_an_equation() -> Result<(), regex::Error> {
        let equations = [
            "F = ma",
            "E = hf",
            "a + b",
            "sin(x)^2",
            "E = 1/2 mv^2",
            "f h",
            "pythagoras",
        ];
        for (pattern, equation) in REGEX_EXAMPLES.iter().zip(equations) {
            let re = regex::Regex::new(pattern)?;
            assert!(re.is_match(equation), "{pattern} should match {equation}");
        }
        Ok(())
    }

    #[test]
    fn mode_selects_pool() {
        assert_eq!(ExamplePool::for_regex_mode(true), ExamplePool::Regex);
        assert_eq!(ExamplePool::for_regex_mode(false), ExamplePool::Plain);
    }
}
