use crate::domain::common::value_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Денежные поля бронирования, которые суммируются по неделям
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAmountField {
    Paid,
    Original,
    Refund,
}

impl BookingAmountField {
    pub const ALL: [BookingAmountField; 3] = [
        BookingAmountField::Paid,
        BookingAmountField::Original,
        BookingAmountField::Refund,
    ];
}

/// A booking as the backend sends it.
///
/// `updated_at` is an ISO string or epoch milliseconds; the amounts are
/// numbers or numeric strings. Nothing is validated on the way in.
/// The refund field keeps the backend spelling `refund_ammount`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(default)]
    pub updated_at: Option<Value>,
    #[serde(default)]
    pub paid_price: Option<Value>,
    #[serde(default)]
    pub original_price: Option<Value>,
    #[serde(default)]
    pub refund_ammount: Option<Value>,
    #[serde(default)]
    pub booker_name: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookingRecord {
    pub fn amount_value(&self, field: BookingAmountField) -> Option<&Value> {
        match field {
            BookingAmountField::Paid => self.paid_price.as_ref(),
            BookingAmountField::Original => self.original_price.as_ref(),
            BookingAmountField::Refund => self.refund_ammount.as_ref(),
        }
    }

    /// Amount parsed as an integer, see [`parse_int_lenient`]
    pub fn amount(&self, field: BookingAmountField) -> i64 {
        parse_int_lenient(self.amount_value(field))
    }

    pub fn booker_name(&self) -> Cow<'_, str> {
        value_text(self.booker_name.as_ref())
    }
}

/// Parses an amount the way the dashboard always has: leading whitespace,
/// optional sign, then decimal digits up to the first non-digit. Numbers are
/// truncated toward zero. Anything without leading digits is 0.
pub fn parse_int_lenient(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i
            } else {
                // `as` saturates on out-of-range floats and maps NaN to 0
                n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
            }
        }
        Some(Value::String(s)) => parse_leading_int(s),
        _ => 0,
    }
}

fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = acc.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -acc
    } else {
        acc
    }
}
