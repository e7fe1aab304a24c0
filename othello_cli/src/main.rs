//! 標準入出力で遊ぶ最小のフロントエンド。
//!
//! 盤面はテキストで表示し、ログは JSON で標準エラーへ出す。

use std::io;
use std::process::ExitCode;

use clap::Parser as _;

mod options;
mod play;

use options::{CliError, Options};

/// ログ出力（JSON、標準エラー）を初期化する。
fn init_tracing(level: tracing::Level) {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// エントリーポイント。
fn main() -> ExitCode {
    let options = Options::parse();

    init_tracing(options.log_level);
    let config = options.config();
    tracing::info!(
        breadth = config.breadth(),
        depth = config.depth(),
        games = options.games,
        "othello_cli start"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match play::run(&options, &mut input, &mut out) {
        Ok(finishes) => {
            tracing::info!(played = finishes.len(), "othello_cli exit");
            ExitCode::SUCCESS
        }
        Err(CliError::Io(err)) => {
            tracing::error!(%err, "i/o failure");
            ExitCode::FAILURE
        }
    }
}
