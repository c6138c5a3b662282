//! Runtime configuration: playback speed and input array generation

use crate::catalog::Family;
use crate::errors::InputError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::time::Duration;

/// Smallest array the generator produces
pub const MIN_ARRAY_SIZE: usize = 1;

/// Largest array the generator produces (a few hundred at most keeps traces readable)
pub const MAX_ARRAY_SIZE: usize = 200;

pub const DEFAULT_ARRAY_SIZE: usize = 20;

/// Auto-play interval between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
    Instant,
}

impl Speed {
    pub fn delay(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(1000),
            Speed::Medium => Duration::from_millis(500),
            Speed::Fast => Duration::from_millis(200),
            Speed::Instant => Duration::ZERO,
        }
    }

    pub fn faster(self) -> Self {
        match self {
            Speed::Slow => Speed::Medium,
            Speed::Medium => Speed::Fast,
            Speed::Fast | Speed::Instant => Speed::Instant,
        }
    }

    pub fn slower(self) -> Self {
        match self {
            Speed::Instant => Speed::Fast,
            Speed::Fast => Speed::Medium,
            Speed::Medium | Speed::Slow => Speed::Slow,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
            Speed::Instant => "instant",
        };
        f.write_str(label)
    }
}

/// Shape of randomly generated input arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    pub size: usize,
    pub min: i64,
    pub max: i64,
}

impl ArrayConfig {
    /// Defaults per engine: taller bars for sorting, smaller values for searching
    pub fn for_family(family: Family) -> Self {
        match family {
            Family::Sorting => ArrayConfig {
                size: DEFAULT_ARRAY_SIZE,
                min: 10,
                max: 300,
            },
            Family::Searching => ArrayConfig {
                size: DEFAULT_ARRAY_SIZE,
                min: 10,
                max: 100,
            },
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&self.size) {
            return Err(InputError::SizeOutOfRange {
                size: self.size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }
        if self.min > self.max {
            return Err(InputError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Random array of `config.size` values drawn uniformly from `config.min..=config.max`
pub fn generate_array<R: Rng + ?Sized>(
    config: &ArrayConfig,
    rng: &mut R,
) -> Result<Vec<i64>, InputError> {
    config.validate()?;
    Ok((0..config.size)
        .map(|_| rng.gen_range(config.min..=config.max))
        .collect())
}

/// Search target drawn from the array itself so a fresh search usually succeeds
pub fn pick_target<R: Rng + ?Sized>(array: &[i64], rng: &mut R) -> i64 {
    array.choose(rng).copied().unwrap_or(0)
}

/// Parse `"5, 3 8,1"` into `[5, 3, 8, 1]`
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(InputError::EmptyArray);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_array_mixed_separators() {
        assert_eq!(parse_array("5, 3 8,1"), Ok(vec![5, 3, 8, 1]));
        assert_eq!(parse_array(" -2 "), Ok(vec![-2]));
    }

    #[test]
    fn test_parse_array_errors() {
        assert_eq!(parse_array(" , "), Err(InputError::EmptyArray));
        assert_eq!(
            parse_array("1,x"),
            Err(InputError::InvalidNumber {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_generate_array_respects_config() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = ArrayConfig {
            size: 50,
            min: 10,
            max: 20,
        };
        let array = generate_array(&config, &mut rng).expect("valid config");
        assert_eq!(array.len(), 50);
        assert!(array.iter().all(|v| (10..=20).contains(v)));
    }

    #[test]
    fn test_generate_array_rejects_bad_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = ArrayConfig {
            size: 0,
            ..ArrayConfig::for_family(Family::Sorting)
        };
        assert!(matches!(
            generate_array(&config, &mut rng),
            Err(InputError::SizeOutOfRange { size: 0, .. })
        ));
    }

    #[test]
    fn test_pick_target_comes_from_array() {
        let mut rng = StdRng::seed_from_u64(1);
        let array = vec![4, 8, 15];
        assert!(array.contains(&pick_target(&array, &mut rng)));
        assert_eq!(pick_target(&[], &mut rng), 0);
    }

    #[test]
    fn test_speed_delays_and_cycle() {
        assert_eq!(Speed::default().delay(), Duration::from_millis(500));
        assert_eq!(Speed::Instant.delay(), Duration::ZERO);
        assert_eq!(Speed::Slow.faster().faster().faster(), Speed::Instant);
        assert_eq!(Speed::Instant.slower(), Speed::Fast);
    }
}
