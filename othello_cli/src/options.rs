//! コマンドライン引数の解釈。

use core::fmt;
use std::io;

use clap::{Parser, ValueEnum};
use othello_core::ai::SearchConfig;
use othello_core::engine::Color;
use tracing::Level;

/// 席（人間か AI か）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Seat {
    /// 探索AI。
    #[value(alias = "cpu")]
    Ai,
    /// 標準入力から手を読む。
    Human,
}

/// CLI のエラー。
#[derive(Debug)]
pub enum CliError {
    /// 入出力の失敗。
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl core::error::Error for CliError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// 標準入出力で遊ぶオセロ。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Parser)]
#[command(name = "othello_cli", version)]
pub struct Options {
    /// 黒の席。
    #[arg(long, value_enum, default_value_t = Seat::Human)]
    pub black: Seat,
    /// 各手番で残す候補の割合（0..=5、範囲外は 5 に丸める）。
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8))]
    pub breadth: u8,
    /// 先読みの最大深さ（0..=8、範囲外は 8 に丸める）。
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8))]
    pub depth: u8,
    /// 連続で遊ぶ対局数。
    #[arg(long, default_value_t = 1)]
    pub games: u32,
    /// ログの最大レベル（error, warn, info, debug, trace）。
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
    /// 白の席。
    #[arg(long, value_enum, default_value_t = Seat::Ai)]
    pub white: Seat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            black: Seat::Human,
            breadth: 0,
            depth: 0,
            games: 1,
            log_level: Level::INFO,
            white: Seat::Ai,
        }
    }
}

impl Options {
    /// 探索設定を返す。範囲外の値は `SearchConfig::new` が丸める。
    pub fn config(&self) -> SearchConfig {
        SearchConfig::new(self.breadth, self.depth)
    }

    /// どちらかの席が人間かを返す。
    pub fn has_human(&self) -> bool {
        self.black == Seat::Human || self.white == Seat::Human
    }

    /// undo/redo を何手分まとめて行うか。片方だけが AI なら AI の手も飛ばすため 2。
    pub fn history_step(&self) -> u8 {
        if self.black == self.white { 1 } else { 2 }
    }

    /// 指定色の席を返す。
    pub const fn seat(&self, color: Color) -> Seat {
        match color {
            Color::Black => self.black,
            _ => self.white,
        }
    }
}
