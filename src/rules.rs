use crate::auction::Amount;
use rust_decimal::RoundingStrategy;

/// Tunables of an auction run
#[derive(Clone, Debug)]
pub struct AuctionRules {
    /// Fewest items a manually entered catalog may have
    pub min_items: usize,
    /// Tax added on top of a winning bid, as a fraction
    pub tax_rate: Amount,
}

impl Default for AuctionRules {
    fn default() -> Self {
        Self {
            min_items: 10,
            tax_rate: Amount::new(10, 2),
        }
    }
}

impl AuctionRules {
    /// Price a buyer pays for a sold item, rounded to cents
    ///
    /// `None` when the taxed price does not fit in an [`Amount`]; bids like
    /// that are refused while bidding, so settlement never sees one.
    pub fn checked_final_price(&self, winning_bid: Amount) -> Option<Amount> {
        winning_bid
            .checked_mul(Amount::ONE + self.tax_rate)
            .map(|price| price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn final_price(&self, winning_bid: Amount) -> Amount {
        self.checked_final_price(winning_bid).unwrap_or(Amount::MAX)
    }
}
