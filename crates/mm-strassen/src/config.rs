use std::fmt;
use std::str::FromStr;

use mm_matrix::{MatrixError, Result};

/// Environment key for [`StrassenConfig::size_policy`].
pub const ENV_SIZE_POLICY: &str = "MM_SIZE_POLICY";
/// Environment key for [`StrassenConfig::leaf_size`].
pub const ENV_LEAF_SIZE: &str = "MM_LEAF_SIZE";
/// Environment key for [`StrassenConfig::parallel_depth`].
pub const ENV_PARALLEL_DEPTH: &str = "MM_PARALLEL_DEPTH";

/// How `multiply` treats a dimension that is not a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Fail with `InvalidSize` before recursing.
    #[default]
    Reject,
    /// Zero-pad both operands to the next power of two and crop the product
    /// back to the logical dimension.
    Pad,
}

impl SizePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizePolicy::Reject => "reject",
            SizePolicy::Pad => "pad",
        }
    }
}

impl fmt::Display for SizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizePolicy {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(SizePolicy::Reject),
            "pad" => Ok(SizePolicy::Pad),
            other => Err(MatrixError::InvalidConfig(format!(
                "unknown size policy '{}', expected 'reject' or 'pad'",
                other
            ))),
        }
    }
}

/// Tuning knobs for [`crate::MatrixMultiplier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrassenConfig {
    /// Treatment of non-power-of-two dimensions.
    pub size_policy: SizePolicy,
    /// Dimension at or below which the naive triple loop replaces recursion.
    /// Must be a power of two. `1` recurses all the way to scalars.
    pub leaf_size: usize,
    /// Recursion depths below this value fan the seven products out onto the
    /// rayon pool. `0` keeps everything on the calling thread.
    pub parallel_depth: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        StrassenConfig {
            size_policy: SizePolicy::Reject,
            leaf_size: 1,
            parallel_depth: 0,
        }
    }
}

impl StrassenConfig {
    pub fn with_size_policy(mut self, size_policy: SizePolicy) -> Self {
        self.size_policy = size_policy;
        self
    }

    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    pub fn with_parallel_depth(mut self, parallel_depth: usize) -> Self {
        self.parallel_depth = parallel_depth;
        self
    }

    /// Checks that the leaf size is a positive power of two.
    pub fn validate(&self) -> Result<()> {
        if !self.leaf_size.is_power_of_two() {
            return Err(MatrixError::InvalidConfig(format!(
                "leaf size must be a positive power of two, got {}",
                self.leaf_size
            )));
        }
        Ok(())
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads the following keys, falling back to the defaults when unset:
    /// - `MM_SIZE_POLICY` -> size_policy (`reject` | `pad`)
    /// - `MM_LEAF_SIZE` -> leaf_size
    /// - `MM_PARALLEL_DEPTH` -> parallel_depth
    pub fn from_env() -> Result<StrassenConfig> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<StrassenConfig> {
        let defaults = StrassenConfig::default();

        let size_policy = match lookup(ENV_SIZE_POLICY) {
            Some(v) => v.parse()?,
            None => defaults.size_policy,
        };
        let leaf_size = parse_usize(&lookup, ENV_LEAF_SIZE)?.unwrap_or(defaults.leaf_size);
        let parallel_depth =
            parse_usize(&lookup, ENV_PARALLEL_DEPTH)?.unwrap_or(defaults.parallel_depth);

        let config = StrassenConfig {
            size_policy,
            leaf_size,
            parallel_depth,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    lookup(key)
        .map(|v| {
            v.trim().parse::<usize>().map_err(|e| {
                MatrixError::InvalidConfig(format!("{}={:?} is not a valid count: {}", key, v, e))
            })
        })
        .transpose()
}
