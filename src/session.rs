use crate::auction::BuyerRoster;
use crate::console::Prompt;
use crate::rules::AuctionRules;
use crate::settlement::{self, Summary};
use crate::{bidding, catalog, table};
use anyhow::Result;
use tracing::info;

/// Run a whole auction: build the catalog, take bids, print the settlement
///
/// Returns `None` if the run was aborted while building the catalog.
pub fn run(
    prompt: &mut impl Prompt,
    rules: &AuctionRules,
    roster: &BuyerRoster,
) -> Result<Option<Summary>> {
    let Some(mut store) = catalog::build(prompt, rules)? else {
        info!("auction aborted before bidding");
        return Ok(None);
    };

    bidding::run(prompt, &mut store, roster, rules)?;

    let settlement = settlement::settle(&store, rules);
    prompt.say("\nFinal auction status:")?;
    prompt.say(&table::settlement_table(&settlement))?;
    Ok(Some(settlement.summary()))
}
