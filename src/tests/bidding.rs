use super::{scripted, transcript};
use crate::{
    auction::{BidError, Buyer, BuyerRoster, Item},
    bidding,
    rules::AuctionRules,
    store::AuctionStore,
};
use anyhow::Result;
use rust_decimal_macros::dec;

fn chair() -> Item {
    Item::new(101, "Antique Chair", dec!(200))
}

#[test]
fn accepts_a_higher_bid_from_a_known_buyer() -> Result<()> {
    let mut item = chair();
    let mut console = scripted(["1001", "250", "no"]);

    bidding::bid_on_item(
        &mut console,
        &BuyerRoster::default(),
        &AuctionRules::default(),
        &mut item,
    )?;

    assert_eq!(item.current_bid(), dec!(250));
    assert_eq!(item.current_buyer(), "John");

    let output = transcript(&console);
    assert!(output.contains("Bidding on item: Antique Chair (Item Number: 101, Current Bid: $0)"));
    assert!(output.contains("Bid placed successfully. Current bid for item 101 is now $250 by John"));
    Ok(())
}

#[test]
fn unknown_buyer_is_rejected_before_the_amount() -> Result<()> {
    for buyer_id in ["9999", "john", "", "-1001", "10o1", ".1001"] {
        let mut item = chair();
        let mut console = scripted([buyer_id, "no"]);

        bidding::bid_on_item(
            &mut console,
            &BuyerRoster::default(),
            &AuctionRules::default(),
            &mut item,
        )?;

        assert_eq!(item, chair());
        let output = transcript(&console);
        assert!(output.contains("Invalid buyer ID. Please try again."));
        assert!(!output.contains("Enter your bid amount"));
    }
    Ok(())
}

#[test]
fn bid_must_beat_the_current_one() -> Result<()> {
    let roster = BuyerRoster::default();
    let rules = AuctionRules::default();
    let mut item = chair();
    item.place_bid(&Buyer::new(1001, "John"), dec!(100))?;
    let before = item.clone();

    for amount in ["100", "99.99", "0", "-5", "lots"] {
        let mut console = scripted(["1002", amount, "no"]);

        bidding::bid_on_item(&mut console, &roster, &rules, &mut item)?;

        assert_eq!(item, before);
        assert!(transcript(&console)
            .contains("Invalid bid. It must be higher than the current bid. Please try again."));
    }
    Ok(())
}

#[test]
fn first_bid_must_be_above_zero() {
    let mut item = chair();

    let res = item.place_bid(&Buyer::new(1001, "John"), dec!(0));

    assert!(matches!(res, Err(BidError::InvalidAmount)));
    assert!(!item.has_bids());
}

#[test]
fn keeps_taking_bids_while_the_answer_is_yes() -> Result<()> {
    let mut item = chair();
    let mut console = scripted([
        "1001", "100", "yes",
        "1002", "150", " YES ",
        "1003", "120", "yes",
        "4242", "Yes",
        "1003", "150.01", "y",
        "1001", "999",
    ]);

    bidding::bid_on_item(
        &mut console,
        &BuyerRoster::default(),
        &AuctionRules::default(),
        &mut item,
    )?;

    assert_eq!(item.current_bid(), dec!(150.01));
    assert_eq!(item.current_buyer(), "Jane");
    assert_eq!(
        transcript(&console)
            .matches("Bidding on item: Antique Chair")
            .count(),
        5
    );
    Ok(())
}

#[test]
fn place_bid_reports_the_reason() -> Result<()> {
    let roster = BuyerRoster::default();
    let rules = AuctionRules::default();
    let mut item = chair();

    let res = bidding::place_bid(&mut scripted(["7"]), &roster, &rules, &mut item);
    assert!(matches!(res, Err(BidError::UnknownBuyer)));

    let res = bidding::place_bid(&mut scripted(["1001", "abc"]), &roster, &rules, &mut item);
    assert!(matches!(res, Err(BidError::InvalidAmount)));

    let res = bidding::place_bid(&mut scripted(["1001"]), &roster, &rules, &mut item);
    assert!(matches!(res, Err(BidError::Input(_))));

    bidding::place_bid(&mut scripted(["1003", "75.5"]), &roster, &rules, &mut item)?;
    assert_eq!(item.current_bid(), dec!(75.5));
    assert_eq!(item.current_buyer(), "Jane");
    Ok(())
}

#[test]
fn items_are_auctioned_in_catalog_order() -> Result<()> {
    let mut store = AuctionStore::new();
    store.insert(Item::new(2, "Rug", dec!(10)))?;
    store.insert(Item::new(1, "Lamp", dec!(10)))?;
    let mut console = scripted([
        "1001", "20", "no",
        "1002", "5", "no",
    ]);

    bidding::run(
        &mut console,
        &mut store,
        &BuyerRoster::default(),
        &AuctionRules::default(),
    )?;

    let rug = store.get(2).expect("rug");
    assert_eq!((rug.current_bid(), rug.current_buyer()), (dec!(20), "John"));
    let lamp = store.get(1).expect("lamp");
    assert_eq!((lamp.current_bid(), lamp.current_buyer()), (dec!(5), "Mark"));

    let output = transcript(&console);
    let rug_at = output.find("Bidding on item: Rug").expect("rug banner");
    let lamp_at = output.find("Bidding on item: Lamp").expect("lamp banner");
    assert!(rug_at < lamp_at);
    Ok(())
}

#[test]
fn answers_are_read_up_to_the_first_non_numeric_character() -> Result<()> {
    let roster = BuyerRoster::default();
    let rules = AuctionRules::default();
    let mut item = chair();

    let mut console = scripted(["1001.0", "250abc"]);
    bidding::place_bid(&mut console, &roster, &rules, &mut item)?;
    assert_eq!((item.current_bid(), item.current_buyer()), (dec!(250), "John"));

    let mut console = scripted([" 1002 please", "260.5.9"]);
    bidding::place_bid(&mut console, &roster, &rules, &mut item)?;
    assert_eq!((item.current_bid(), item.current_buyer()), (dec!(260.5), "Mark"));

    let mut console = scripted(["1003", "+261$"]);
    bidding::place_bid(&mut console, &roster, &rules, &mut item)?;
    assert_eq!((item.current_bid(), item.current_buyer()), (dec!(261), "Jane"));
    Ok(())
}

#[test]
fn bid_too_large_to_settle_is_invalid() -> Result<()> {
    let roster = BuyerRoster::default();
    let rules = AuctionRules::default();
    let mut item = chair();

    for amount in ["79228162514264337593543950335", "79228162514264337593543950336"] {
        let mut console = scripted(["1001", amount]);
        let res = bidding::place_bid(&mut console, &roster, &rules, &mut item);
        assert!(matches!(res, Err(BidError::InvalidAmount)));
        assert_eq!(item, chair());
    }

    bidding::place_bid(
        &mut scripted(["1001", "1000000000000000000000000000"]),
        &roster,
        &rules,
        &mut item,
    )?;
    assert_eq!(item.current_bid(), dec!(1000000000000000000000000000));
    Ok(())
}
