// src/params.rs

pub const BASE_URL: &str = "https://ratings.ranked-rtanks.online";
pub const USER_PATH: &str = "/user/";

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// The site serves a reduced page to unknown agents; present a browser UA.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Leaderboard entries per page.
pub const PAGE_SIZE: usize = 10;

pub fn user_url(username: &str) -> String {
    join!(BASE_URL, USER_PATH, username)
}

/// All leaderboard categories live on the landing page.
pub fn leaderboard_url() -> String {
    s!(BASE_URL)
}
