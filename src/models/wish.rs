use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishView {
    pub fid: i64,
    pub date: String,
    pub next_date: String,
    pub display_date: String,
    pub is_today: bool,
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WishCount {
    pub count: usize,
}
