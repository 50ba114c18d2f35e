use crate::models::ProfileSnapshot;

pub const MAX_SCORE: u8 = 100;

/// Chart palette, assigned to languages by rank.
pub const PALETTE: [&str; 6] = ["#00ff41", "#00f3ff", "#bc13fe", "#ff003c", "#ffff00", "#ffffff"];

/// Cosmetic "hacker score": `min(100, 2*stars + public_repos + followers/2)`.
pub fn hacker_score(snapshot: &ProfileSnapshot) -> u8 {
    let raw = snapshot
        .total_stars
        .saturating_mul(2)
        .saturating_add(u64::from(snapshot.user.public_repos))
        .saturating_add(u64::from(snapshot.user.followers) / 2);

    raw.min(u64::from(MAX_SCORE)) as u8
}

pub fn language_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
