use crate::config::toml_config::{AuctionConfig, AuctionKind};
use crate::core::auction::{
    Auction, AuctionFormat, AuctionOutcome, Bidder, ReserveAuction, StandardAuction,
};
use crate::domain::ports::Console;

pub fn run(config: &AuctionConfig, out: &mut dyn Console) -> AuctionOutcome {
    let mut auction = Auction::new(&config.item);
    for name in &config.bidders {
        auction.attach(Box::new(Bidder::new(name)));
    }

    let bids = config.scripted_bids();
    tracing::info!(
        "Running {:?} auction for {} with {} observers",
        config.format,
        config.item,
        auction.observer_count()
    );

    let outcome = match config.format {
        AuctionKind::Standard => StandardAuction::with_bids(auction, bids).execute(out),
        AuctionKind::Reserve => {
            ReserveAuction::with_bids(auction, config.reserve_price, bids).execute(out)
        }
    };

    tracing::debug!("Auction outcome: {:?}", outcome);
    outcome
}
