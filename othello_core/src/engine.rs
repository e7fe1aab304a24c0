/// 盤面（8x8）と位置ボーナス表。
pub mod board;
/// 石の反転の計算・適用・取り消し。
pub mod capture;
/// ゲーム進行（手番、石数、終局判定、undo/redo）の実装。
pub mod game;
/// 盤面・手番・石数のスナップショット履歴。
pub mod history;
/// 合法手の列挙と評価。
pub mod scorer;
pub mod types;

pub type Board = board::Board;
pub type Cell = types::Cell;
pub type Color = types::Color;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type History = history::History;
pub type Outcome = game::Outcome;
pub type PlayError = game::PlayError;
pub type Score = types::Score;
pub type ScoredMove = scorer::ScoredMove;
pub type Square = types::Square;
