use crate::premium::{ClassRules, DEFAULT_MARINE_CARGO_CODE, DEFAULT_MISCELLANEOUS_CODE};

/// Form engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Max log level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | MARINE_CARGO_CLASS_CODE | MC | Class code that carries stamp duty |
/// | MISC_CLASS_CODE | MISC | Class code that carries VAT |
/// | VAT_RATE_PERCENT | (unset) | Derive VAT from premium at this rate |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug VAT_RATE_PERCENT=15 cargo run --example recompute -- omp.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    /// Log to daily files in this directory instead of stdout
    pub log_dir: Option<String>,
    pub marine_cargo_class_code: String,
    pub miscellaneous_class_code: String,
    /// VAT rate for Miscellaneous policies; unset means VAT is typed in
    pub vat_rate_percent: Option<f64>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            environment: non_blank("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: non_blank("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_blank("LOG_DIR"),
            marine_cargo_class_code: non_blank("MARINE_CARGO_CLASS_CODE")
                .unwrap_or_else(|| DEFAULT_MARINE_CARGO_CODE.into()),
            miscellaneous_class_code: non_blank("MISC_CLASS_CODE")
                .unwrap_or_else(|| DEFAULT_MISCELLANEOUS_CODE.into()),
            vat_rate_percent: non_blank("VAT_RATE_PERCENT")
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|rate| rate.is_finite() && *rate >= 0.0),
        }
    }

    /// Class rules for the premium calculator
    pub fn class_rules(&self) -> ClassRules {
        ClassRules {
            marine_cargo_code: self.marine_cargo_class_code.clone(),
            miscellaneous_code: self.miscellaneous_class_code.clone(),
            vat_rate_percent: self.vat_rate_percent,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
