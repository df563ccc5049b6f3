use std::fmt;

pub const USD_SYMBOL: &str = "$";
pub const EGP_SYMBOL: &str = "E£";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyMode {
    #[default]
    Usd,
    Egp,
}

impl CurrencyMode {
    pub fn from_egp_flag(egp: bool) -> Self {
        if egp {
            CurrencyMode::Egp
        } else {
            CurrencyMode::Usd
        }
    }
}

impl fmt::Display for CurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyMode::Usd => write!(f, "USD"),
            CurrencyMode::Egp => write!(f, "EGP"),
        }
    }
}

/// Display currency plus the USD to EGP multiplier. Fetched data is always USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    pub mode: CurrencyMode,
    pub rate: f64,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            mode: CurrencyMode::Usd,
            rate: 1.0,
        }
    }
}

impl Currency {
    pub fn convert(&self, amount_usd: f64) -> String {
        match self.mode {
            CurrencyMode::Egp => {
                format!("{}{:?}", EGP_SYMBOL, round_cents(amount_usd * self.rate))
            }
            CurrencyMode::Usd => format!("{}{:?}", USD_SYMBOL, round_cents(amount_usd)),
        }
    }
}

// `{:.2}` rounds the exact binary value with ties to even, so 1.115 (stored as
// 1.11499..) gives 1.11 and 0.125 gives 0.12. `{:?}` then prints the shortest
// round-trip digits with at least one fractional digit.
fn round_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_whole_amount_keeps_one_decimal() {
        assert_eq!(Currency::default().convert(10.0), "$10.0");
    }

    #[test]
    fn test_egp_applies_rate() {
        let currency = Currency {
            mode: CurrencyMode::Egp,
            rate: 50.0,
        };
        assert_eq!(currency.convert(10.0), "E£500.0");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let usd = Currency::default();
        assert_eq!(usd.convert(19.99), "$19.99");
        assert_eq!(usd.convert(7.5), "$7.5");
        assert_eq!(usd.convert(19.999), "$20.0");
        assert_eq!(usd.convert(0.0), "$0.0");
    }

    #[test]
    fn test_rounding_uses_stored_value_and_ties_to_even() {
        let usd = Currency::default();
        assert_eq!(usd.convert(0.125), "$0.12");
        assert_eq!(usd.convert(1.115), "$1.11");
        assert_eq!(usd.convert(0.625), "$0.62");
        assert_eq!(usd.convert(0.375), "$0.38");

        let egp = Currency {
            mode: CurrencyMode::Egp,
            rate: 48.5,
        };
        assert_eq!(egp.convert(0.25), "E£12.12");
    }

    #[test]
    fn test_rate_ignored_in_usd_mode() {
        let currency = Currency {
            mode: CurrencyMode::Usd,
            rate: 48.0,
        };
        assert_eq!(currency.convert(2.0), "$2.0");
    }

    #[test]
    fn test_fallback_rate_egp_equals_usd_amount() {
        let currency = Currency {
            mode: CurrencyMode::Egp,
            rate: 1.0,
        };
        assert_eq!(currency.convert(12.5), "E£12.5");
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(CurrencyMode::from_egp_flag(true), CurrencyMode::Egp);
        assert_eq!(CurrencyMode::from_egp_flag(false), CurrencyMode::Usd);
        assert_eq!(CurrencyMode::Egp.to_string(), "EGP");
    }
}
