//! Category allow-list
//!
//! A filter is an ordered list of `pattern:LEVEL` rules. For a given category
//! the last rule whose pattern matches decides the most verbose level that is
//! let through; a category no rule matches is silenced.
//!
//! ```text
//! *:WARNING,serialization:DEBUG,net.*:TRACE
//! ```
//!
//! Patterns are an exact category name, a prefix ending in `*`, or `*` alone.
//! A rule without a pattern (`INFO`) applies to `*`. A bare digit selects a
//! preset verbosity (`0` = `*:WARNING` up to `3` = `*:TRACE`).

use crate::level::Level;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a filter specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    /// Unrecognized level name
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    /// Rule with an empty pattern before the colon
    #[error("empty category pattern in rule '{0}'")]
    EmptyPattern(String),

    /// `*` somewhere other than the end of a pattern
    #[error("wildcard must be the last character of pattern '{0}'")]
    MisplacedWildcard(String),

    /// Numeric preset outside 0..=4
    #[error("log preset {0} out of range (0-4)")]
    PresetOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    Any,
    Prefix(String),
    Exact(String),
}

impl Pattern {
    fn parse(raw: &str) -> Result<Self, FilterParseError> {
        if raw == "*" {
            return Ok(Pattern::Any);
        }
        match raw.find('*') {
            None => Ok(Pattern::Exact(raw.to_string())),
            Some(pos) if pos == raw.len() - 1 => {
                Ok(Pattern::Prefix(raw[..pos].to_string()))
            }
            Some(_) => Err(FilterParseError::MisplacedWildcard(raw.to_string())),
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Prefix(prefix) => category.starts_with(prefix.as_str()),
            Pattern::Exact(name) => category == name,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => write!(f, "*"),
            Pattern::Prefix(prefix) => write!(f, "{prefix}*"),
            Pattern::Exact(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    pattern: Pattern,
    max_level: Level,
}

/// Ordered category/level allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    rules: Vec<Rule>,
}

impl Default for CategoryFilter {
    /// `*:WARNING`
    fn default() -> Self {
        CategoryFilter::all(Level::Warning)
    }
}

impl CategoryFilter {
    /// Filter that lets nothing through
    pub fn silent() -> Self {
        CategoryFilter { rules: Vec::new() }
    }

    /// Filter that lets every category through up to `max_level`
    pub fn all(max_level: Level) -> Self {
        CategoryFilter {
            rules: vec![Rule {
                pattern: Pattern::Any,
                max_level,
            }],
        }
    }

    /// Parse a comma-separated rule list
    pub fn parse(spec: &str) -> Result<Self, FilterParseError> {
        let spec = spec.trim();
        if let Ok(preset) = spec.parse::<u32>() {
            return Self::preset(preset);
        }

        let mut filter = CategoryFilter::silent();
        for raw in spec.split(',').map(str::trim).filter(|r| !r.is_empty()) {
            let (pattern, level) = match raw.rsplit_once(':') {
                Some((pattern, level)) => {
                    let pattern = pattern.trim();
                    if pattern.is_empty() {
                        return Err(FilterParseError::EmptyPattern(raw.to_string()));
                    }
                    (Pattern::parse(pattern)?, level.trim())
                }
                None => (Pattern::Any, raw),
            };
            filter.rules.push(Rule {
                pattern,
                max_level: level.parse()?,
            });
        }
        Ok(filter)
    }

    /// Numeric verbosity presets
    pub fn preset(preset: u32) -> Result<Self, FilterParseError> {
        let level = match preset {
            0 => Level::Warning,
            1 => Level::Info,
            2 => Level::Debug,
            3 | 4 => Level::Trace,
            n => return Err(FilterParseError::PresetOutOfRange(n)),
        };
        Ok(CategoryFilter::all(level))
    }

    /// Append a rule; it takes precedence over every earlier rule it overlaps.
    pub fn with_rule(mut self, pattern: &str, max_level: Level) -> Result<Self, FilterParseError> {
        if pattern.is_empty() {
            return Err(FilterParseError::EmptyPattern(pattern.to_string()));
        }
        self.rules.push(Rule {
            pattern: Pattern::parse(pattern)?,
            max_level,
        });
        Ok(self)
    }

    /// Most verbose level allowed for `category`, if any
    pub fn max_level(&self, category: &str) -> Option<Level> {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.pattern.matches(category))
            .map(|rule| rule.max_level)
    }

    /// Whether a message at `level` for `category` passes the filter
    pub fn allows(&self, level: Level, category: &str) -> bool {
        self.max_level(category)
            .map_or(false, |max| level <= max)
    }
}

impl FromStr for CategoryFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::parse(s)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", rule.pattern, rule.max_level)?;
        }
        Ok(())
    }
}
