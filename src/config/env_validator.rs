//! Environment variable validation with typo suggestions
//!
//! An invalid value never aborts a run: the caller keeps its current
//! setting and reports the returned `EnvWarning`.

use std::fmt;

/// Rejected environment value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var_name: String,
    pub value: String,
    pub valid_values: Vec<String>,
    pub suggestion: Option<String>,
}

impl fmt::Display for EnvWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value '{}'", self.var_name, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{suggestion}'?")?;
        }
        write!(f, " Valid values: {}", self.valid_values.join(", "))
    }
}

/// Validator for one environment variable with a closed set of values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, EnvWarning>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| EnvWarning {
            var_name: self.var_name.to_string(),
            value: value.to_string(),
            valid_values: self.valid_values.iter().map(|v| v.to_string()).collect(),
            suggestion: suggest(value, self.valid_values),
        })
    }
}

/// Closest candidate within two edits, if any
pub(crate) fn suggest(input: &str, candidates: &[&str]) -> Option<String> {
    let input = input.to_lowercase();
    candidates
        .iter()
        .map(|candidate| (*candidate, levenshtein(&input, candidate)))
        .filter(|(_, dist)| (1..=2).contains(dist))
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}

/// Byte-wise edit distance; config keys and values are ASCII.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("test", "test"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("verbos", "verbose"), 1);
        assert_eq!(levenshtein("quite", "quiet"), 2);
        assert_eq!(levenshtein("policy_dri", "policy_dir"), 2);
    }

    #[test]
    fn valid_value_parses() {
        let validator = EnvVarValidator::new("TEST_VAR", &["foo", "bar"]);
        let result = validator.parse("foo", |s| (s == "foo").then_some(1));
        assert_eq!(result, Ok(1));
    }

    #[test]
    fn invalid_value_suggests_closest() {
        let validator = EnvVarValidator::new("SOCKET_CONFIGURATOR_VERBOSITY", &["quiet", "normal"]);

        let warning = validator.parse("nromal", |_| None::<()>).unwrap_err();

        assert_eq!(warning.suggestion.as_deref(), Some("normal"));
        assert_eq!(
            warning.to_string(),
            "Invalid SOCKET_CONFIGURATOR_VERBOSITY value 'nromal'. Did you mean 'normal'? Valid values: quiet, normal"
        );
    }

    #[test]
    fn far_values_get_no_suggestion() {
        let validator = EnvVarValidator::new("TEST", &["quiet", "normal"]);
        let warning = validator.parse("xyzzy", |_| None::<()>).unwrap_err();
        assert_eq!(warning.suggestion, None);
        assert!(!warning.to_string().contains("Did you mean"));
    }
}
