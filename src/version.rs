use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` runtime version as printed by `node --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl RuntimeVersion {
    /// Numeric comparison on `(major, minor)`; the patch level is ignored.
    pub fn is_at_least(&self, major: u64, minor: u64) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl FromStr for RuntimeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw = trimmed.strip_prefix('v').unwrap_or(trimmed);
        // Pre-release and build suffixes (`-rc.1`, `+build`) are dropped.
        let release = raw.split(['-', '+']).next().unwrap_or(raw);
        let mut parts = release.split('.');

        let mut component = |name: &str, required: bool| -> Result<u64, String> {
            match parts.next() {
                Some(part) => part
                    .parse::<u64>()
                    .map_err(|_| format!("invalid {name} component in version '{trimmed}'")),
                None if required => Err(format!("missing {name} component in version '{trimmed}'")),
                None => Ok(0),
            }
        };

        let major = component("major", true)?;
        let minor = component("minor", true)?;
        let patch = component("patch", false)?;

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
