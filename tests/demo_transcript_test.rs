use pattern_demos::app::demos;
use pattern_demos::config::toml_config::{AuctionKind, GameConfig, LoggingConfig};
use pattern_demos::{DemoConfig, MemoryConsole};

#[test]
fn test_game_demo_transcript() {
    let mut out = MemoryConsole::new();

    let state = demos::game::run(&GameConfig::default(), &mut out).unwrap();

    assert_eq!(state.level(), 1);
    assert_eq!(
        out.lines,
        vec![
            "Starting Level: 1",
            "",
            "Enemies in the Level:",
            "Zombie attacks with a bite!",
            "Alien attacks with a laser blast!",
            "",
            "Easy Mode Items:",
            "Weapon: Basic Sword",
            "Power-Up: Small Health Pack",
            "",
            "Hard Mode Items:",
            "Weapon: Advanced Laser Gun",
            "Power-Up: Large Shield Boost",
        ]
    );
}

#[test]
fn test_standard_auction_demo_transcript() {
    let config = DemoConfig::default();
    let mut out = MemoryConsole::new();

    let outcome = demos::auction::run(&config.auction, &mut out);

    assert_eq!(outcome.item, "Painting");
    assert_eq!(outcome.winner.as_deref(), Some("Alice"));
    assert_eq!(outcome.winning_bid, 180.0);
    assert_eq!(
        out.lines,
        vec![
            "Standard Auction: Preparing auction.",
            "Alice: Item Painting is available.",
            "Bob: Item Painting is available.",
            "Alice: Bidding started for Painting.",
            "Bob: Bidding started for Painting.",
            "Standard Auction: Conducting bidding.",
            "Alice: Placed a bid of $120.0 for Painting.",
            "Bob: Placed a bid of $120.0 for Painting.",
            "Alice: Placed a bid of $150.0 for Painting.",
            "Bob: Placed a bid of $150.0 for Painting.",
            "Alice: Placed a bid of $180.0 for Painting.",
            "Bob: Placed a bid of $180.0 for Painting.",
            "Alice: Bidding ended for Painting.",
            "Bob: Bidding ended for Painting.",
            "Auction winner: Alice with a bid of $180.0",
        ]
    );
}

#[test]
fn test_reserve_auction_demo_with_rejected_bid() {
    let mut config = DemoConfig::default();
    config.auction.format = AuctionKind::Reserve;
    config.auction.reserve_price = 250.0;
    config.auction.bidders = vec!["Carol".to_string()];
    config.auction.bids = Some(vec![
        pattern_demos::core::auction::ScriptedBid::new("Alice", 200.0),
        pattern_demos::core::auction::ScriptedBid::new("Bob", 150.0),
    ]);
    let mut out = MemoryConsole::new();

    let outcome = demos::auction::run(&config.auction, &mut out);

    assert_eq!(outcome.winning_bid, 200.0);
    assert_eq!(
        out.lines,
        vec![
            "Reserve Auction: Preparing auction.",
            "Carol: Item Painting is available.",
            "Carol: Bidding started for Painting.",
            "Reserve Auction: Conducting bidding.",
            "Carol: Placed a bid of $200.0 for Painting.",
            "Bob: Invalid bid. Bid amount must be greater than the current bid.",
            "Reserve price not met. Auction failed.",
            "Carol: Bidding ended for Painting.",
            "Auction winner: Alice with a bid of $200.0",
        ]
    );
}

#[test]
fn test_auction_with_no_bids_has_no_winner() {
    let mut config = DemoConfig::default();
    config.auction.bids = Some(vec![]);
    let mut out = MemoryConsole::new();

    let outcome = demos::auction::run(&config.auction, &mut out);

    assert!(outcome.winner.is_none());
    assert_eq!(
        out.lines.last().map(String::as_str),
        Some("No bids were placed. Auction ended without a winner.")
    );
}

#[test]
fn test_logging_demo_transcript() {
    let mut out = MemoryConsole::new();

    let logger = demos::logging::run(&LoggingConfig::default(), &mut out);

    assert_eq!(logger.len(), 3);
    assert!(out.warnings.is_empty());
    assert_eq!(
        out.lines,
        vec![
            "Log Level: INFO, Message: This is an info message.",
            "INFO: This is an info message.",
            "Log Level: DEBUG, Message: This is a debug message.",
            "DEBUG: This is a debug message.",
            "Log Level: ERROR, Message: This is an error message.",
            "ERROR: This is an error message.",
        ]
    );
}

#[test]
fn test_enrollment_demo_transcript() {
    let mut out = MemoryConsole::new();

    let (student, course) = demos::enrollment::run(&mut out);

    assert_eq!(student.enrolled_courses().len(), 1);
    assert_eq!(course.enrolled_students().len(), 1);
    assert_eq!(
        out.lines,
        vec![
            "STUDENT DETAILS : ",
            "Student Name: CH Hansi",
            "Student ID: 2320030331",
            "Student Year: 2nd year",
            "Enrolled Courses for CH Hansi: [23CS2103R-Advanced Object Oriented Programming]",
            "COURSE DETAILS : ",
            "Course Name: Advanced Object Oriented Programming",
            "Course ID: 23CS2103R",
            "Course Department: CSE",
            "Course Semester: Even Sem",
            "Enrolled Students in Advanced Object Oriented Programming: [CH Hansi (2320030331)]",
        ]
    );
}
