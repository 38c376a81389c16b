//! Switch configuration

use embassy_time::Duration;

use crate::Error;

/// How a pressed switch drives its line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// No pull resistor fitted, the line is interpreted as active high
    None,
    /// Pull-down wiring, a pressed switch drives the line high
    ActiveHigh,
    /// Pull-up wiring, a pressed switch pulls the line low
    #[default]
    ActiveLow,
}

/// Configuration of a single debounced switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    polarity: Polarity,
    threshold: u8,
    sample_interval: Duration,
}

impl SwitchConfig {
    /// Creates a new configuration.
    ///
    /// `threshold` is the number of consecutive active samples needed to move from released to pressed (and
    /// inactive samples to move back), `sample_interval` the minimum time between two reads of the line.
    /// The threshold ranges from 1 to 255 samples.
    pub const fn new(polarity: Polarity, threshold: u8, sample_interval: Duration) -> Result<Self, Error> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold);
        }

        Ok(Self {
            polarity,
            threshold,
            sample_interval,
        })
    }

    /// Gets the switch polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Gets the hysteresis threshold, always at least 1.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Gets the minimum interval between line reads.
    pub fn sample_interval(&self) -> Duration {
        self.sample_interval
    }
}

/// Active low switch with a threshold of 3 and a sample interval of 10ms.
impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            polarity: Polarity::ActiveLow,
            threshold: 3,
            sample_interval: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_rejected() {
        for polarity in [Polarity::None, Polarity::ActiveHigh, Polarity::ActiveLow] {
            assert_eq!(
                SwitchConfig::new(polarity, 0, Duration::from_millis(1)),
                Err(Error::InvalidThreshold)
            );
        }
    }

    #[test]
    fn test_new() {
        let config = SwitchConfig::new(Polarity::ActiveHigh, 1, Duration::from_micros(250)).unwrap();

        assert_eq!(config.polarity(), Polarity::ActiveHigh);
        assert_eq!(config.threshold(), 1);
        assert_eq!(config.sample_interval(), Duration::from_micros(250));
    }

    #[test]
    fn test_default() {
        let config = SwitchConfig::default();

        assert_eq!(config.polarity(), Polarity::ActiveLow);
        assert_eq!(config.threshold(), 3);
        assert_eq!(config.sample_interval(), Duration::from_millis(10));
    }
}
