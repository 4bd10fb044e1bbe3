use crate::domain::ports::Console;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionEventType {
    ItemAvailable,
    BiddingStarted,
    BiddingEnded,
    BidPlaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionEvent {
    pub kind: AuctionEventType,
    pub item: String,
    pub bid_amount: Option<f64>,
}

impl AuctionEvent {
    pub fn new(kind: AuctionEventType, item: &str) -> Self {
        Self {
            kind,
            item: item.to_string(),
            bid_amount: None,
        }
    }

    pub fn bid(item: &str, amount: f64) -> Self {
        Self {
            kind: AuctionEventType::BidPlaced,
            item: item.to_string(),
            bid_amount: Some(amount),
        }
    }
}

/// Whole amounts keep one decimal place (`$120.0`); others print in full (`$150.5`).
pub fn format_amount(amount: f64) -> String {
    format!("${:?}", amount)
}

pub trait Observer {
    fn update(&mut self, event: &AuctionEvent, out: &mut dyn Console);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bidder {
    name: String,
}

impl Bidder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for Bidder {
    fn update(&mut self, event: &AuctionEvent, out: &mut dyn Console) {
        let line = match event.kind {
            AuctionEventType::ItemAvailable => {
                format!("{}: Item {} is available.", self.name, event.item)
            }
            AuctionEventType::BiddingStarted => {
                format!("{}: Bidding started for {}.", self.name, event.item)
            }
            AuctionEventType::BiddingEnded => {
                format!("{}: Bidding ended for {}.", self.name, event.item)
            }
            AuctionEventType::BidPlaced => format!(
                "{}: Placed a bid of {} for {}.",
                self.name,
                format_amount(event.bid_amount.unwrap_or_default()),
                event.item
            ),
        };
        out.line(&line);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct AuctionOutcome {
    pub item: String,
    pub winner: Option<String>,
    pub winning_bid: f64,
}

pub struct Auction {
    item: String,
    current_bid: f64,
    highest_bidder: Option<String>,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: usize,
}

impl Auction {
    pub fn new(item: &str) -> Self {
        Self {
            item: item.to_string(),
            current_bid: 0.0,
            highest_bidder: None,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn current_bid(&self) -> f64 {
        self.current_bid
    }

    pub fn highest_bidder(&self) -> Option<&str> {
        self.highest_bidder.as_deref()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attach(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false when the id was never attached or is already detached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn notify_observers(&mut self, event: &AuctionEvent, out: &mut dyn Console) {
        tracing::debug!(
            "Notifying {} observers of {:?} for {}",
            self.observers.len(),
            event.kind,
            event.item
        );
        for (_, observer) in self.observers.iter_mut() {
            observer.update(event, out);
        }
    }

    pub fn announce_item(&mut self, out: &mut dyn Console) {
        let event = AuctionEvent::new(AuctionEventType::ItemAvailable, &self.item);
        self.notify_observers(&event, out);
    }

    pub fn start_auction(&mut self, out: &mut dyn Console) {
        let event = AuctionEvent::new(AuctionEventType::BiddingStarted, &self.item);
        self.notify_observers(&event, out);
    }

    /// Accepts the bid only when it is strictly greater than the current bid.
    pub fn place_bid(&mut self, bidder: &str, amount: f64, out: &mut dyn Console) -> bool {
        if amount > self.current_bid {
            self.current_bid = amount;
            self.highest_bidder = Some(bidder.to_string());
            let event = AuctionEvent::bid(&self.item, amount);
            self.notify_observers(&event, out);
            true
        } else {
            tracing::debug!(
                "Rejected bid {} from {} (current {})",
                amount,
                bidder,
                self.current_bid
            );
            out.line(&format!(
                "{}: Invalid bid. Bid amount must be greater than the current bid.",
                bidder
            ));
            false
        }
    }

    pub fn end_auction(&mut self, out: &mut dyn Console) -> AuctionOutcome {
        let event = AuctionEvent::new(AuctionEventType::BiddingEnded, &self.item);
        self.notify_observers(&event, out);

        match &self.highest_bidder {
            Some(winner) => out.line(&format!(
                "Auction winner: {} with a bid of {}",
                winner,
                format_amount(self.current_bid)
            )),
            None => out.line("No bids were placed. Auction ended without a winner."),
        }

        AuctionOutcome {
            item: self.item.clone(),
            winner: self.highest_bidder.clone(),
            winning_bid: self.current_bid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedBid {
    pub bidder: String,
    pub amount: f64,
}

impl ScriptedBid {
    pub fn new(bidder: &str, amount: f64) -> Self {
        Self {
            bidder: bidder.to_string(),
            amount,
        }
    }
}

/// Fixed auction skeleton. Formats only supply `prepare` and `conduct_bidding`.
pub trait AuctionFormat {
    fn auction_mut(&mut self) -> &mut Auction;
    fn prepare(&mut self, out: &mut dyn Console);
    fn conduct_bidding(&mut self, out: &mut dyn Console);

    fn execute(&mut self, out: &mut dyn Console) -> AuctionOutcome {
        tracing::debug!("Auction step: prepare");
        self.prepare(out);
        tracing::debug!("Auction step: start");
        self.auction_mut().start_auction(out);
        tracing::debug!("Auction step: conduct");
        self.conduct_bidding(out);
        tracing::debug!("Auction step: end");
        self.auction_mut().end_auction(out)
    }
}

fn place_all(auction: &mut Auction, bids: &[ScriptedBid], out: &mut dyn Console) {
    for bid in bids {
        auction.place_bid(&bid.bidder, bid.amount, out);
    }
}

pub struct StandardAuction {
    auction: Auction,
    bids: Vec<ScriptedBid>,
}

impl StandardAuction {
    pub fn default_bids() -> Vec<ScriptedBid> {
        vec![
            ScriptedBid::new("Alice", 120.0),
            ScriptedBid::new("Bob", 150.0),
            ScriptedBid::new("Alice", 180.0),
        ]
    }

    pub fn new(auction: Auction) -> Self {
        Self::with_bids(auction, Self::default_bids())
    }

    pub fn with_bids(auction: Auction, bids: Vec<ScriptedBid>) -> Self {
        Self { auction, bids }
    }

    pub fn into_auction(self) -> Auction {
        self.auction
    }
}

impl AuctionFormat for StandardAuction {
    fn auction_mut(&mut self) -> &mut Auction {
        &mut self.auction
    }

    fn prepare(&mut self, out: &mut dyn Console) {
        out.line("Standard Auction: Preparing auction.");
        self.auction.announce_item(out);
    }

    fn conduct_bidding(&mut self, out: &mut dyn Console) {
        out.line("Standard Auction: Conducting bidding.");
        place_all(&mut self.auction, &self.bids, out);
    }
}

pub struct ReserveAuction {
    auction: Auction,
    reserve_price: f64,
    bids: Vec<ScriptedBid>,
    reserve_met: Option<bool>,
}

impl ReserveAuction {
    pub fn default_bids() -> Vec<ScriptedBid> {
        vec![
            ScriptedBid::new("Alice", 120.0),
            ScriptedBid::new("Bob", 180.0),
            ScriptedBid::new("Alice", 220.0),
        ]
    }

    pub fn new(auction: Auction, reserve_price: f64) -> Self {
        Self::with_bids(auction, reserve_price, Self::default_bids())
    }

    pub fn with_bids(auction: Auction, reserve_price: f64, bids: Vec<ScriptedBid>) -> Self {
        Self {
            auction,
            reserve_price,
            bids,
            reserve_met: None,
        }
    }

    pub fn reserve_price(&self) -> f64 {
        self.reserve_price
    }

    /// `None` until bidding has been conducted.
    pub fn reserve_met(&self) -> Option<bool> {
        self.reserve_met
    }

    pub fn into_auction(self) -> Auction {
        self.auction
    }
}

impl AuctionFormat for ReserveAuction {
    fn auction_mut(&mut self) -> &mut Auction {
        &mut self.auction
    }

    fn prepare(&mut self, out: &mut dyn Console) {
        out.line("Reserve Auction: Preparing auction.");
        self.auction.announce_item(out);
    }

    fn conduct_bidding(&mut self, out: &mut dyn Console) {
        out.line("Reserve Auction: Conducting bidding.");
        place_all(&mut self.auction, &self.bids, out);

        let met = self.auction.current_bid() >= self.reserve_price;
        self.reserve_met = Some(met);
        if met {
            out.line("Reserve price met. Auction successful.");
        } else {
            out.line("Reserve price not met. Auction failed.");
        }
    }
}
