//! Server version constraints attached to a context

use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` release number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Parse `v0.6.0`, `0.6`, `v1` or `v0.6.0-rc.1` (pre-release and build
    /// suffixes are ignored). Returns `None` for non-numeric builds such as
    /// `edge-latest`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim().trim_start_matches('v');
        let core = trimmed.split(['-', '+']).next().unwrap_or_default();
        if core.is_empty() {
            return None;
        }

        let mut parts = [0u64; 3];
        let mut count = 0;
        for piece in core.split('.') {
            if count == 3 {
                return None;
            }
            parts[count] = piece.parse().ok()?;
            count += 1;
        }

        Some(Self {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Exact,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Caret,
    Tilde,
}

/// A single `<op><version>` clause of a constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    op: Op,
    version: Version,
}

impl Comparator {
    fn matches(&self, v: &Version) -> bool {
        let base = &self.version;
        match self.op {
            Op::Exact => v == base,
            Op::Greater => v > base,
            Op::GreaterEq => v >= base,
            Op::Less => v < base,
            Op::LessEq => v <= base,
            Op::Caret => {
                let upper = if base.major > 0 {
                    Version {
                        major: base.major + 1,
                        minor: 0,
                        patch: 0,
                    }
                } else {
                    Version {
                        major: 0,
                        minor: base.minor + 1,
                        patch: 0,
                    }
                };
                v >= base && v < &upper
            }
            Op::Tilde => {
                let upper = Version {
                    major: base.major,
                    minor: base.minor + 1,
                    patch: 0,
                };
                v >= base && v < &upper
            }
        }
    }
}

impl FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Two-character operators must be checked before their one-character prefixes
        let (op, rest) = [
            (">=", Op::GreaterEq),
            ("<=", Op::LessEq),
            (">", Op::Greater),
            ("<", Op::Less),
            ("=", Op::Exact),
            ("^", Op::Caret),
            ("~", Op::Tilde),
        ]
        .iter()
        .find_map(|(prefix, op)| s.strip_prefix(prefix).map(|rest| (*op, rest)))
        .unwrap_or((Op::Exact, s));

        let version = Version::parse(rest)
            .ok_or_else(|| format!("'{}' is not a valid version", rest.trim()))?;
        Ok(Self { op, version })
    }
}

/// Constraint on the server build a context is allowed to talk to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionConstraint {
    /// Any server build is acceptable
    Any,
    /// Every comparator must hold
    All(Vec<Comparator>),
}

impl VersionConstraint {
    /// Check a server-reported build string against the constraint
    pub fn is_satisfied_by(&self, build: &str) -> bool {
        match self {
            VersionConstraint::Any => true,
            VersionConstraint::All(comparators) => match Version::parse(build) {
                Some(v) => comparators.iter().all(|c| c.matches(&v)),
                None => false,
            },
        }
    }
}

impl FromStr for VersionConstraint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "*" || s.eq_ignore_ascii_case("latest") {
            return Ok(VersionConstraint::Any);
        }

        let comparators = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Comparator>, _>>()?;
        Ok(VersionConstraint::All(comparators))
    }
}
