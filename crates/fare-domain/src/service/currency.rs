//! Currency display

use rust_decimal::{Decimal, RoundingStrategy};
use thousands::Separable;

use crate::model::price::{Price, PRICE_DECIMAL_PLACES};

/// Symbol used by `format_price`
pub const GBP_SYMBOL: &str = "£";

/// Format a price as pounds sterling, en-GB style: `£1,234.50`
pub fn format_price(price: Price) -> String {
    format_amount(price.amount(), GBP_SYMBOL)
}

/// Format an amount with a currency symbol, thousands separators and two decimals
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let rendered = format!("{:.2}", rounded.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let grouped = whole.separate_with_commas();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}
