use std::fmt::Write as _;

use super::currency::Currency;
use crate::api::{GamePrices, HistoricalLow};
use crate::{Error, Result};

const DATE_PREFIX_LEN: usize = 10;

pub fn no_price_data(title: &str) -> String {
    format!("No price data available for '{}'.", title)
}

/// Render the price details panel for one overview entry.
pub fn render(title: &str, prices: &GamePrices, currency: &Currency) -> Result<String> {
    let current = prices
        .current
        .as_ref()
        .ok_or_else(|| Error::UnexpectedResponse(format!("no current offer for '{}'", title)))?;

    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(text, "🎮 {}\n", title);
    let _ = writeln!(text, "Store: {}", current.shop.name);
    let _ = writeln!(text, "Current Price: {}", currency.convert(current.price.amount));
    let _ = writeln!(text, "Regular Price: {}", currency.convert(current.regular.amount));
    let _ = writeln!(text, "Discount: {}%", current.cut);

    if let Some(drm) = current.drm.first() {
        let _ = writeln!(text, "DRM: {}", drm.name);
    }
    if let Some(platform) = current.platforms.first() {
        let _ = writeln!(text, "Platform: {}", platform.name);
    }

    let _ = writeln!(text, "Link: {}\n", current.url);
    text.push_str(&render_lowest(prices.lowest.as_ref(), currency));

    Ok(text)
}

fn render_lowest(lowest: Option<&HistoricalLow>, currency: &Currency) -> String {
    let Some((low, price)) = lowest.and_then(|low| low.price.map(|price| (low, price))) else {
        return "🔻 Lowest Price: Not available.\n".to_string();
    };

    let mut text = format!(
        "🔻 Lowest Price: {} ({}% off)\n",
        currency.convert(price.amount),
        low.cut.unwrap_or(0)
    );
    if let Some(timestamp) = &low.timestamp {
        let date: String = timestamp.chars().take(DATE_PREFIX_LEN).collect();
        let _ = writeln!(text, "Date: {}", date);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Deal, Money, Named};
    use crate::tracker::currency::CurrencyMode;
    use pretty_assertions::assert_eq;

    fn deal() -> Deal {
        Deal {
            shop: Named {
                name: "Steam".to_string(),
            },
            price: Money { amount: 9.99 },
            regular: Money { amount: 24.99 },
            cut: 60,
            drm: vec![
                Named {
                    name: "Steam".to_string(),
                },
                Named {
                    name: "Denuvo".to_string(),
                },
            ],
            platforms: vec![Named {
                name: "Windows".to_string(),
            }],
            url: "https://itad.link/hades/".to_string(),
        }
    }

    fn lowest(price: Option<f64>) -> HistoricalLow {
        HistoricalLow {
            price: price.map(|amount| Money { amount }),
            cut: Some(65),
            timestamp: Some("2023-11-21T18:03:21+01:00".to_string()),
        }
    }

    #[test]
    fn test_full_report() {
        let prices = GamePrices {
            current: Some(deal()),
            lowest: Some(lowest(Some(8.74))),
        };
        let text = render("Hades", &prices, &Currency::default()).unwrap();
        assert_eq!(
            text,
            "🎮 Hades\n\n\
             Store: Steam\n\
             Current Price: $9.99\n\
             Regular Price: $24.99\n\
             Discount: 60%\n\
             DRM: Steam\n\
             Platform: Windows\n\
             Link: https://itad.link/hades/\n\n\
             🔻 Lowest Price: $8.74 (65% off)\n\
             Date: 2023-11-21\n"
        );
    }

    #[test]
    fn test_null_lowest_price_not_available() {
        let prices = GamePrices {
            current: Some(deal()),
            lowest: Some(lowest(None)),
        };
        let text = render("Hades", &prices, &Currency::default()).unwrap();
        assert!(text.ends_with("🔻 Lowest Price: Not available.\n"));
        assert!(!text.contains("Date:"));
    }

    #[test]
    fn test_missing_lowest_not_available() {
        let prices = GamePrices {
            current: Some(deal()),
            lowest: None,
        };
        let text = render("Hades", &prices, &Currency::default()).unwrap();
        assert!(text.contains("🔻 Lowest Price: Not available."));
    }

    #[test]
    fn test_drm_and_platform_lines_omitted_when_empty() {
        let mut bare = deal();
        bare.drm.clear();
        bare.platforms.clear();
        let prices = GamePrices {
            current: Some(bare),
            lowest: None,
        };
        let text = render("Hades", &prices, &Currency::default()).unwrap();
        assert!(!text.contains("DRM:"));
        assert!(!text.contains("Platform:"));
    }

    #[test]
    fn test_egp_conversion_applies_to_all_amounts() {
        let mut offer = deal();
        offer.price = Money { amount: 10.0 };
        offer.regular = Money { amount: 20.0 };
        let prices = GamePrices {
            current: Some(offer),
            lowest: Some(lowest(Some(5.0))),
        };
        let currency = Currency {
            mode: CurrencyMode::Egp,
            rate: 50.0,
        };
        let text = render("Hades", &prices, &currency).unwrap();
        assert!(text.contains("Current Price: E£500.0\n"));
        assert!(text.contains("Regular Price: E£1000.0\n"));
        assert!(text.contains("🔻 Lowest Price: E£250.0 (65% off)\n"));
    }

    #[test]
    fn test_missing_current_offer_is_error() {
        let prices = GamePrices {
            current: None,
            lowest: None,
        };
        let result = render("Hades", &prices, &Currency::default());
        assert!(matches!(result, Err(Error::UnexpectedResponse(_))));
    }

    #[test]
    fn test_no_price_data_message() {
        assert_eq!(
            no_price_data("Hades"),
            "No price data available for 'Hades'."
        );
    }
}
