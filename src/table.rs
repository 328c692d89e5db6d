//! Fixed-width console tables
use crate::auction::{Amount, Item};
use crate::settlement::{Settlement, Status};
use crate::store::AuctionStore;
use rust_decimal::RoundingStrategy;

const CATALOG_HEADER: &str = "Item Number    | Description            | Reserve Price    | Current Bid   | Current Buyer   ";
const CATALOG_RULE: &str = "---------------|------------------------|------------------|---------------|-----------------";

const SETTLEMENT_HEADER: &str = "Item Number    | Description            | Reserve Price    | Final Bid     | Final Buyer     | Status            | Final Price     ";
const SETTLEMENT_RULE: &str = "---------------|------------------------|------------------|---------------|-----------------|-------------------|-----------------";

/// Placeholder for a price that does not apply
const NO_PRICE: &str = "---";

/// Money with exactly two decimals, e.g. `200.00`
pub fn money(amount: Amount) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn row_prefix(item: &Item) -> String {
    format!(
        "{:<15}| {:<22} | {:>16} | {:>13}",
        item.number(),
        item.description(),
        money(item.reserve_price()),
        money(item.current_bid()),
    )
}

pub fn catalog_table(store: &AuctionStore) -> String {
    let mut lines = vec![
        "\nCurrent items and their status:".to_owned(),
        CATALOG_HEADER.to_owned(),
        CATALOG_RULE.to_owned(),
    ];
    lines.extend(
        store
            .iter()
            .map(|item| format!("{} | {:>14}", row_prefix(item), item.current_buyer())),
    );
    lines.join("\n")
}

pub fn settlement_table(settlement: &Settlement) -> String {
    let mut lines = vec![
        "\nAuction result and items status:".to_owned(),
        SETTLEMENT_HEADER.to_owned(),
        SETTLEMENT_RULE.to_owned(),
    ];

    for (item, status) in settlement.rows() {
        let final_price = match status {
            Status::Sold { final_price } => money(*final_price),
            Status::NotMetReserve | Status::NoBids => NO_PRICE.to_owned(),
        };
        lines.push(format!(
            "{} | {:>15} | {:<17} | {:>14}",
            row_prefix(item),
            item.current_buyer(),
            status.label(),
            final_price,
        ));
    }

    let summary = settlement.summary();
    lines.push("\nAuction Summary:".to_owned());
    lines.push(format!("Items Sold: {}", summary.sold));
    lines.push(format!(
        "Items Unsold (Bids not meeting reserve): {}",
        summary.not_met_reserve
    ));
    lines.push(format!("Items with No Bids: {}", summary.no_bids));
    lines.join("\n")
}
