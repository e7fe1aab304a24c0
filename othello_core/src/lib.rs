//! Othello (Reversi) core logic.
//!
//! このクレートはゲーム進行と undo/redo を管理する `engine` と、手を選択する `ai` を提供します。
//! 描画や入力は利用側（`othello_cli` など）が担当します。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行・履歴を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
