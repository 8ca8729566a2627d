use std::path::Path;

use serde::Deserialize;

use crate::{
    catalog::{Catalog, DEFAULT_HISTORY_LIMIT},
    date::{CalendarDate, DateArithmetic},
    error::{CatalogError, ConfigError},
    policy::{Clock, DEFAULT_LOAN_PERIOD_DAYS, LoanPolicy},
    sample,
};

/// Top-level catalog configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Loan settings.
    #[serde(default)]
    pub loan: LoanConfig,

    /// Catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// The `[loan]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanConfig {
    /// Length of a loan in days.
    #[serde(default = "default_period_days")]
    pub period_days: u32,
    /// How due dates are computed.
    #[serde(default)]
    pub arithmetic: DateArithmetic,
    /// Fixed "today" used when the system clock is off.
    #[serde(default)]
    pub issue_date: CalendarDate,
    /// Take "today" from the local system date.
    #[serde(default)]
    pub use_system_clock: bool,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            arithmetic: DateArithmetic::default(),
            issue_date: CalendarDate::default(),
            use_system_clock: false,
        }
    }
}

/// Default loan period.
fn default_period_days() -> u32 {
    DEFAULT_LOAN_PERIOD_DAYS
}

/// The `[catalog]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Load the five sample books at startup.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
    /// Maximum number of loan transitions kept.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed_samples: default_true(), history_limit: default_history_limit() }
    }
}

/// Serde default for flags that start enabled.
fn default_true() -> bool {
    true
}

/// Default history capacity.
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl LibraryConfig {
    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Apply command-line overrides on top of the loaded values.
    ///
    /// `false` and `None` leave the corresponding setting as configured.
    pub fn apply_overrides(&mut self, no_samples: bool, loan_days: Option<u32>, day_field: bool) {
        if no_samples {
            self.catalog.seed_samples = false;
        }
        if let Some(days) = loan_days {
            self.loan.period_days = days;
        }
        if day_field {
            self.loan.arithmetic = DateArithmetic::DayField;
        }
    }

    /// Loan policy described by the `[loan]` table.
    #[must_use]
    pub fn loan_policy(&self) -> LoanPolicy {
        let clock = if self.loan.use_system_clock {
            Clock::System
        } else {
            Clock::Fixed(self.loan.issue_date)
        };
        LoanPolicy { period_days: self.loan.period_days, arithmetic: self.loan.arithmetic, clock }
    }

    /// Build the catalog described by this configuration.
    ///
    /// # Errors
    ///
    /// Propagates `CatalogError` from seeding the sample books.
    pub fn build_catalog(&self) -> Result<Catalog, CatalogError> {
        let mut catalog =
            Catalog::with_policy(self.loan_policy()).with_history_limit(self.catalog.history_limit);
        if self.catalog.seed_samples {
            sample::seed(&mut catalog)?;
        }
        Ok(catalog)
    }
}
