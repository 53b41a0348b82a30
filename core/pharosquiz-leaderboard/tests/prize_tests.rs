use pharosquiz_leaderboard::{
    distribute, PrizeError, PrizePool, PrizeSplit, Standings, TxHash, BASIS_POINTS,
};
use pharosquiz_types::{Player, PlayerId};
use pretty_assertions::assert_eq;

fn standings(scores: &[i64]) -> (Vec<Player>, Standings) {
    let players: Vec<Player> = scores
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::with_id(PlayerId::new(), format!("P{i}"), s).unwrap())
        .collect();
    let standings = Standings::from_players(&players);
    (players, standings)
}

fn pool(amount: u64) -> PrizePool {
    PrizePool::new(amount, "PHAR").unwrap()
}

// ── PrizePool ────────────────────────────────────────────────────

#[test]
fn pool_parse_and_display() {
    let p = PrizePool::parse("100 PHAR").unwrap();
    assert_eq!(p.amount, 100);
    assert_eq!(p.token, "PHAR");
    assert_eq!(p.to_string(), "100 PHAR");
    assert_eq!("  250   ETH ".parse::<PrizePool>().unwrap().amount, 250);
}

#[test]
fn pool_parse_rejects_garbage() {
    assert!(matches!(PrizePool::parse("PHAR"), Err(PrizeError::InvalidPrizePool(_))));
    assert!(PrizePool::parse("ten PHAR").is_err());
    assert!(PrizePool::parse("10 PHAR extra").is_err());
    assert!(PrizePool::parse("10 PH-AR").is_err());
}

// ── PrizeSplit ───────────────────────────────────────────────────

#[test]
fn default_split_is_50_30_20() {
    let split = PrizeSplit::default();
    assert_eq!(split.shares(), &[5_000, 3_000, 2_000]);
    assert_eq!(split.shares().iter().sum::<u32>(), BASIS_POINTS);
}

#[test]
fn split_must_sum_to_whole() {
    assert!(PrizeSplit::new(vec![5_000, 3_000]).is_err());
    assert!(PrizeSplit::new(vec![]).is_err());
    assert!(PrizeSplit::new(vec![10_000]).is_ok());
    assert!(serde_json::from_str::<PrizeSplit>("[6000, 4000]").is_ok());
    assert!(serde_json::from_str::<PrizeSplit>("[6000, 3000]").is_err());
}

// ── distribute ───────────────────────────────────────────────────

#[test]
fn podium_gets_default_split() {
    let (players, standings) = standings(&[820, 780, 750, 680, 620]);
    let dist = distribute(&standings, &pool(100), &PrizeSplit::default());

    let amounts: Vec<(PlayerId, u64)> = dist.awards.iter().map(|a| (a.player_id, a.amount)).collect();
    assert_eq!(
        amounts,
        vec![(players[0].id, 50), (players[1].id, 30), (players[2].id, 20)]
    );
    assert_eq!(dist.undistributed, 0);
    assert!(dist.award_for(&players[3].id).is_none());
}

#[test]
fn tie_for_first_splits_first_and_second() {
    let (players, standings) = standings(&[500, 500, 300, 100]);
    let dist = distribute(&standings, &pool(100), &PrizeSplit::default());

    assert_eq!(dist.award_for(&players[0].id).unwrap().amount, 40);
    assert_eq!(dist.award_for(&players[1].id).unwrap().amount, 40);
    assert_eq!(dist.award_for(&players[2].id).unwrap().rank, 3);
    assert_eq!(dist.award_for(&players[2].id).unwrap().amount, 20);
    assert!(dist.award_for(&players[3].id).is_none());
    assert_eq!(dist.total_awarded(), 100);
}

#[test]
fn tie_straddling_last_place_shares_only_paid_places() {
    let (players, standings) = standings(&[900, 800, 700, 700, 700]);
    let dist = distribute(&standings, &pool(100), &PrizeSplit::default());

    // third place (20) split three ways
    for p in &players[2..] {
        assert_eq!(dist.award_for(&p.id).unwrap().amount, 6);
    }
    assert_eq!(dist.total_awarded(), 98);
    assert_eq!(dist.undistributed, 2);
}

#[test]
fn zero_scores_are_not_paid() {
    let (players, standings) = standings(&[300, 0, 0]);
    let dist = distribute(&standings, &pool(100), &PrizeSplit::default());
    assert_eq!(dist.awards.len(), 1);
    assert_eq!(dist.award_for(&players[0].id).unwrap().amount, 50);
    assert_eq!(dist.undistributed, 50);
}

#[test]
fn fewer_players_than_places() {
    let (_, standings) = standings(&[10]);
    let dist = distribute(&standings, &pool(1_000), &PrizeSplit::default());
    assert_eq!(dist.total_awarded(), 500);
    assert_eq!(dist.undistributed, 500);
}

#[test]
fn empty_standings_pay_nothing() {
    let dist = distribute(&Standings::default(), &pool(100), &PrizeSplit::default());
    assert!(dist.awards.is_empty());
    assert_eq!(dist.undistributed, 100);
}

#[test]
fn large_pool_does_not_overflow() {
    let (players, standings) = standings(&[1]);
    let dist = distribute(&standings, &pool(u64::MAX), &PrizeSplit::new(vec![10_000]).unwrap());
    assert_eq!(dist.award_for(&players[0].id).unwrap().amount, u64::MAX);
}

// ── TxHash ───────────────────────────────────────────────────────

const HASH: &str = "0x3a8d94e5e5a89d2d131d4987d38db49c1eb742eabc74a15883e54b9853b91a55";

#[test]
fn tx_hash_abbreviates() {
    let hash = TxHash::parse(HASH).unwrap();
    assert_eq!(hash.abbreviated(), "0x3a8d...1a55");
    assert_eq!(hash.as_str(), HASH);
}

#[test]
fn tx_hash_rejects_malformed() {
    assert!(matches!(TxHash::parse("3a8d"), Err(PrizeError::InvalidTxHash(_))));
    assert!(TxHash::parse("0x1234").is_err());
    assert!(TxHash::parse(&HASH.replace('a', "z")).is_err());
}

#[test]
fn tx_hash_normalizes_case() {
    let upper = format!("0x{}", HASH[2..].to_ascii_uppercase());
    assert_eq!(TxHash::parse(&upper).unwrap().as_str(), HASH);
}
