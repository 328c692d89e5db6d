//! Bidding loop
//!
//! Items are auctioned one at a time, in catalog order. Each item keeps
//! taking bids until the operator says there are no more.
use crate::auction::{parse_amount, parse_integer, Amount, BidError, BuyerRoster, Item};
use crate::console::{is_yes, Prompt};
use crate::rules::AuctionRules;
use crate::store::AuctionStore;
use anyhow::Result;
use tracing::{debug, info};

const BANNER_RULE_WIDTH: usize = 93;

pub fn run(
    prompt: &mut impl Prompt,
    store: &mut AuctionStore,
    roster: &BuyerRoster,
    rules: &AuctionRules,
) -> Result<()> {
    for item in store.iter_mut() {
        bid_on_item(prompt, roster, rules, item)?;
    }
    Ok(())
}

pub fn bid_on_item(
    prompt: &mut impl Prompt,
    roster: &BuyerRoster,
    rules: &AuctionRules,
    item: &mut Item,
) -> Result<()> {
    loop {
        prompt.say(&banner(item))?;

        match place_bid(prompt, roster, rules, item) {
            Ok(()) => prompt.say(&format!(
                "Bid placed successfully. Current bid for item {} is now ${} by {}",
                item.number(),
                item.current_bid().normalize(),
                item.current_buyer(),
            ))?,
            Err(BidError::Input(e)) => return Err(e),
            Err(e) => {
                debug!(item = item.number(), error = ?e, "bid rejected");
                prompt.say(&e.to_string())?;
            }
        }

        if !is_yes(&prompt.ask("Is there another bid? (yes/no): ")?) {
            return Ok(());
        }
    }
}

/// Take one bid from the operator and apply it to `item`
///
/// The buyer is checked before the amount is even asked for. An amount
/// whose taxed price cannot be represented is refused like any other
/// invalid bid. On any error `item` is left untouched.
pub fn place_bid(
    prompt: &mut impl Prompt,
    roster: &BuyerRoster,
    rules: &AuctionRules,
    item: &mut Item,
) -> Result<(), BidError> {
    let buyer = parse_integer(&prompt.ask("\nEnter your buyer ID: ")?)
        .and_then(|id| roster.find(id))
        .ok_or(BidError::UnknownBuyer)?;

    let amount: Amount = parse_amount(&prompt.ask("Enter your bid amount: $")?)
        .filter(|amount| rules.checked_final_price(*amount).is_some())
        .ok_or(BidError::InvalidAmount)?;

    item.place_bid(buyer, amount)?;
    info!(
        item = item.number(),
        buyer = %buyer.name,
        amount = %amount,
        "bid accepted"
    );
    Ok(())
}

fn banner(item: &Item) -> String {
    let rule = "-".repeat(BANNER_RULE_WIDTH);
    format!(
        "\n\n{rule}\n\nBidding on item: {} (Item Number: {}, Current Bid: ${})\n\n{rule}",
        item.description(),
        item.number(),
        item.current_bid().normalize(),
    )
}
