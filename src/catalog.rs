//! Catalog builder
//!
//! Fills an [`AuctionStore`] either from the built-in test lots or from
//! items the operator types in.
use crate::auction::{parse_amount, parse_integer, Amount, Item, ItemNumber};
use crate::console::{is_no, is_yes, Prompt};
use crate::rules::AuctionRules;
use crate::store::{AuctionStore, StoreError};
use crate::table;
use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info};

pub const TEST_CATALOG: [(ItemNumber, &str, i64); 10] = [
    (101, "Antique Chair", 200),
    (102, "Painting", 500),
    (103, "Collectible Toy", 100),
    (104, "Vintage Watch", 800),
    (105, "Jewelry Set", 750),
    (106, "Rare Coin", 300),
    (107, "Antique Book", 150),
    (108, "Vintage Camera", 250),
    (109, "Art Sculpture", 1000),
    (110, "Classic Car", 15000),
];

/// Why a manually entered item was thrown away
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Please enter a valid number for the item number.")]
    InvalidItemNumber,
    #[error(transparent)]
    Duplicate(#[from] StoreError),
    #[error("Please enter a valid number for the reserve price.")]
    InvalidReservePrice,
    #[error(transparent)]
    Input(#[from] anyhow::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    TestData,
    Manual,
}

pub fn test_catalog() -> AuctionStore {
    let mut store = AuctionStore::new();
    for (number, description, reserve_price) in TEST_CATALOG {
        store
            .insert(Item::new(number, description, Amount::from(reserve_price)))
            .expect("test catalog numbers are unique");
    }
    store
}

/// Build the catalog and show it to the operator
///
/// Returns `None` when the operator asked for fewer items than
/// [`AuctionRules::min_items`]; the run has to stop there.
pub fn build(prompt: &mut impl Prompt, rules: &AuctionRules) -> Result<Option<AuctionStore>> {
    let store = match ask_source(prompt)? {
        Source::TestData => {
            let store = test_catalog();
            prompt.say("\nTest data has been added to the auction.")?;
            store
        }
        Source::Manual => {
            let Some(count) = ask_item_count(prompt, rules)? else {
                return Ok(None);
            };
            let store = enter_items(prompt, count)?;
            prompt.say("\nAll items have been entered")?;
            store
        }
    };

    info!(items = store.len(), "catalog built");
    prompt.say(&table::catalog_table(&store))?;
    Ok(Some(store))
}

fn ask_source(prompt: &mut impl Prompt) -> Result<Source> {
    loop {
        let answer = prompt.ask("Do you want to use test data? (yes/no): ")?;
        if is_yes(&answer) {
            return Ok(Source::TestData);
        }
        if is_no(&answer) {
            return Ok(Source::Manual);
        }
        prompt.say("Please enter yes or no.")?;
    }
}

fn ask_item_count(prompt: &mut impl Prompt, rules: &AuctionRules) -> Result<Option<usize>> {
    let answer = prompt.ask("How many items do you want to enter? ")?;
    let count = parse_integer(&answer)
        .and_then(|count| usize::try_from(count).ok())
        .filter(|count| rules.min_items <= *count);

    if count.is_none() {
        debug!(%answer, min_items = rules.min_items, "item count rejected");
        prompt.say(&format!(
            "There must be at least {} items in the auction.",
            rules.min_items
        ))?;
    }
    Ok(count)
}

/// Prompt for `count` items, retrying a slot until it holds a valid item
pub fn enter_items(prompt: &mut impl Prompt, count: usize) -> Result<AuctionStore> {
    let mut store = AuctionStore::new();
    while store.len() < count {
        match read_entry(prompt, &store) {
            Ok(item) => {
                debug!(number = item.number(), "item added");
                store.insert(item)?;
            }
            Err(EntryError::Input(e)) => return Err(e),
            Err(e) => {
                debug!(slot = store.len(), error = %e, "item entry rejected");
                prompt.say(&e.to_string())?;
            }
        }
    }
    Ok(store)
}

fn read_entry(prompt: &mut impl Prompt, store: &AuctionStore) -> Result<Item, EntryError> {
    let number =
        parse_integer(&prompt.ask("\nItem number: ")?).ok_or(EntryError::InvalidItemNumber)?;
    if store.contains(number) {
        return Err(StoreError::DuplicateItem(number).into());
    }

    let description = prompt.ask("Description: ")?;
    let reserve_price = parse_amount(&prompt.ask("Reserve price: $")?)
        .filter(|price| Amount::ZERO <= *price)
        .ok_or(EntryError::InvalidReservePrice)?;

    Ok(Item::new(number, description, reserve_price))
}
