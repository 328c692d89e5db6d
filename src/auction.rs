use rust_decimal::Decimal;
use thiserror::Error;

pub type ItemNumber = i64;
pub type BuyerId = i64;
pub type Amount = Decimal;

/// Buyer shown for an item nobody bid on
pub const NO_BUYER: &str = "none";

#[derive(Error, Debug)]
pub enum BidError {
    #[error("Invalid buyer ID. Please try again.")]
    UnknownBuyer,
    /// Not a number, not above the current bid, or too large to settle
    #[error("Invalid bid. It must be higher than the current bid. Please try again.")]
    InvalidAmount,
    /// Reading the bid from the operator failed
    #[error(transparent)]
    Input(#[from] anyhow::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buyer {
    pub id: BuyerId,
    pub name: String,
}

impl Buyer {
    pub fn new(id: BuyerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The fixed set of buyers allowed to bid
#[derive(Clone, Debug)]
pub struct BuyerRoster(Vec<Buyer>);

impl Default for BuyerRoster {
    fn default() -> Self {
        Self(vec![
            Buyer::new(1001, "John"),
            Buyer::new(1002, "Mark"),
            Buyer::new(1003, "Jane"),
        ])
    }
}

impl BuyerRoster {
    pub fn find(&self, id: BuyerId) -> Option<&Buyer> {
        self.0.iter().find(|buyer| buyer.id == id)
    }
}

/// A lot in the auction
///
/// Number, description and reserve are fixed at creation. The current
/// bid and buyer only ever move together, through [`Item::place_bid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    number: ItemNumber,
    description: String,
    reserve_price: Amount,
    current_bid: Amount,
    current_buyer: String,
}

impl Item {
    pub fn new(number: ItemNumber, description: impl Into<String>, reserve_price: Amount) -> Self {
        Self {
            number,
            description: description.into(),
            reserve_price,
            current_bid: Amount::ZERO,
            current_buyer: NO_BUYER.to_owned(),
        }
    }

    pub fn number(&self) -> ItemNumber {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reserve_price(&self) -> Amount {
        self.reserve_price
    }

    pub fn current_bid(&self) -> Amount {
        self.current_bid
    }

    pub fn current_buyer(&self) -> &str {
        &self.current_buyer
    }

    pub fn has_bids(&self) -> bool {
        self.current_bid > Amount::ZERO
    }

    pub fn is_outbid_by(&self, amount: Amount) -> bool {
        self.current_bid < amount
    }

    pub fn place_bid(&mut self, buyer: &Buyer, amount: Amount) -> Result<(), BidError> {
        if !self.is_outbid_by(amount) {
            return Err(BidError::InvalidAmount);
        }
        self.current_bid = amount;
        self.current_buyer = buyer.name.clone();
        Ok(())
    }
}

/// The leading `[+-]digits[.digits]` of `input`, ignoring whatever follows
///
/// Operators type things like `250$` or `10 items`; only the number up front
/// counts, and an answer that does not start with one has no value.
fn leading_number(input: &str, with_fraction: bool) -> Option<String> {
    let rest = input.trim_start();
    let (sign, rest) = match rest.as_bytes().first() {
        Some(b'-') => ("-", &rest[1..]),
        Some(b'+') => ("", &rest[1..]),
        _ => ("", rest),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int, rest) = rest.split_at(int_len);
    let frac = match rest.strip_prefix('.') {
        Some(tail) if with_fraction => &tail[..tail.bytes().take_while(u8::is_ascii_digit).count()],
        _ => "",
    };

    match (int, frac) {
        ("", "") => None,
        (int, "") => Some(format!("{sign}{int}")),
        ("", frac) => Some(format!("{sign}0.{frac}")),
        (int, frac) => Some(format!("{sign}{int}.{frac}")),
    }
}

/// Parse an operator-supplied integer (item number, buyer ID, item count)
///
/// A fractional part is dropped: `10.5` reads as 10.
pub fn parse_integer(input: &str) -> Option<i64> {
    leading_number(input, false)?.parse().ok()
}

/// Parse an operator-supplied money amount
pub fn parse_amount(input: &str) -> Option<Amount> {
    leading_number(input, true)?.parse().ok()
}
