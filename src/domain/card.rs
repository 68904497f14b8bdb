use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Raw card fields submitted for a direct-API authorization.
///
/// `Debug` masks everything but the last four digits of the number and hides
/// the security code, so the struct is safe to log.
#[derive(Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub card_number: String,
    pub expiration_date: String,
    pub card_code: String,
}

impl CardData {
    pub fn new(
        card_number: impl Into<String>,
        expiration_date: impl Into<String>,
        card_code: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiration_date: expiration_date.into(),
            card_code: card_code.into(),
        }
    }

    /// Reads the card fields out of an untyped payment data bag.
    ///
    /// Numeric fields (a card code typed as `123`) are taken as their decimal
    /// text. Missing, null, empty or non-scalar fields yield `None`.
    pub fn from_value(data: &Value) -> Option<Self> {
        Some(Self {
            card_number: text(data, "cardNumber")?,
            expiration_date: text(data, "expirationDate")?,
            card_code: text(data, "cardCode")?,
        })
    }

    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        let visible = digits.len().min(4);
        let last_four: String = digits[digits.len() - visible..].iter().collect();
        format!("{}{}", "*".repeat(digits.len() - visible), last_four)
    }
}

fn text(data: &Value, name: &str) -> Option<String> {
    match data.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl fmt::Debug for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardData")
            .field("card_number", &self.masked_number())
            .field("expiration_date", &self.expiration_date)
            .field("card_code", &"***")
            .finish()
    }
}
