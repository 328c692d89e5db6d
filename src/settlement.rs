//! Settlement
//!
//! Once bidding is over every item ends in exactly one [`Status`].
use crate::auction::{Amount, Item};
use crate::rules::AuctionRules;
use crate::store::AuctionStore;
use tracing::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Highest bid met the reserve; `final_price` includes tax
    Sold { final_price: Amount },
    /// There were bids, but none reached the reserve
    NotMetReserve,
    NoBids,
}

impl Status {
    pub fn classify(item: &Item, rules: &AuctionRules) -> Self {
        if !item.has_bids() {
            Status::NoBids
        } else if item.current_bid() >= item.reserve_price() {
            Status::Sold {
                final_price: rules.final_price(item.current_bid()),
            }
        } else {
            Status::NotMetReserve
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Sold { .. } => "Sold",
            Status::NotMetReserve => "Not Met Reserve",
            Status::NoBids => "No Bids",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub sold: usize,
    pub not_met_reserve: usize,
    pub no_bids: usize,
}

impl Summary {
    fn count(mut self, status: &Status) -> Self {
        match status {
            Status::Sold { .. } => self.sold += 1,
            Status::NotMetReserve => self.not_met_reserve += 1,
            Status::NoBids => self.no_bids += 1,
        }
        self
    }
}

/// Final state of every item, in store order
pub struct Settlement<'s> {
    rows: Vec<(&'s Item, Status)>,
    summary: Summary,
}

impl<'s> Settlement<'s> {
    pub fn rows(&self) -> &[(&'s Item, Status)] {
        &self.rows
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }
}

pub fn settle<'s>(store: &'s AuctionStore, rules: &AuctionRules) -> Settlement<'s> {
    let rows: Vec<_> = store
        .iter()
        .map(|item| (item, Status::classify(item, rules)))
        .collect();
    let summary = rows
        .iter()
        .fold(Summary::default(), |summary, (_, status)| summary.count(status));

    info!(
        sold = summary.sold,
        not_met_reserve = summary.not_met_reserve,
        no_bids = summary.no_bids,
        "auction settled"
    );

    Settlement { rows, summary }
}
