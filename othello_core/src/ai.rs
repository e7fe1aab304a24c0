/// 合法手からランダムに1手選ぶAI。
pub mod random;
/// 幅・深さ制限付きの再帰探索AI。
pub mod search;
pub mod types;

pub type Move = types::Move;
pub type SearchConfig = search::config::SearchConfig;
