//! 行単位の入出力で対局を進めるターンループ。

use std::io::{BufRead, Write};

use othello_core::ai::{self, Move, SearchConfig};
use othello_core::engine::{Color, Game, GameStatus, Outcome, PlayError, Square};
use tracing::{info, warn};

use crate::options::{CliError, Options, Seat};

/// 人間の対局中の入力コマンド。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// この対局をやめる（`q`）。
    EndMatch,
    /// すべてやめて終了する（`Q`）。
    Exit,
    /// 操作一覧を表示する。
    Help,
    /// 任意パス。
    Pass,
    /// 指定マスに打つ。
    Play(Square),
    /// 履歴を進める。
    Redo,
    /// 履歴を戻す。
    Undo,
}

impl Command {
    /// 1行を解釈する。`d3` 形式のマス、または `u`/`r`/`p`/`q`/`Q`/`?`。
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed == "Q" {
            return Some(Self::Exit);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "?" | "h" | "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            "p" | "pass" => Some(Self::Pass),
            "q" | "quit" => Some(Self::EndMatch),
            "r" | "redo" => Some(Self::Redo),
            "u" | "undo" => Some(Self::Undo),
            other => parse_square(other).map(Self::Play),
        }
    }
}

/// 対局の合間の入力コマンド。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Setup {
    /// 幅を変更する（`b N`）。
    Breadth(u8),
    /// 深さを変更する（`d N`）。
    Depth(u8),
    /// 終了する（`Q` / `q`）。
    Exit,
    /// 次の対局を始める（空行 / `s`）。
    Start,
}

impl Setup {
    /// 1行を解釈する。
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next();
        let value = words.next().and_then(|word| word.parse::<u8>().ok());
        if words.next().is_some() {
            return None;
        }

        match (head, value) {
            (None | Some("s" | "start"), None) => Some(Self::Start),
            (Some("b" | "breadth"), Some(number)) => Some(Self::Breadth(number)),
            (Some("d" | "depth"), Some(number)) => Some(Self::Depth(number)),
            (Some("q" | "Q" | "exit"), None) => Some(Self::Exit),
            _ => None,
        }
    }
}

/// `d3` 形式（列 a..h、行 1..8）のマスを解釈する。
fn parse_square(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return None;
    };

    let col = u32::from(file)
        .checked_sub(u32::from('a'))
        .and_then(|value| u8::try_from(value).ok());
    let row = rank
        .to_digit(10)
        .and_then(|value| value.checked_sub(1))
        .and_then(|value| u8::try_from(value).ok());

    match (row, col) {
        (Some(row_index), Some(col_index)) => Square::from_row_col(row_index, col_index),
        _ => None,
    }
}

/// 1局の終わり方。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Finish {
    /// 途中でやめた（`q`）。次の対局へ進む。
    Abandoned,
    /// 終局した。
    Completed(Outcome),
    /// すべてやめた（`Q` または入力の終端）。
    Exited,
}

/// 人間の1回の操作の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Turn {
    /// 対局を続ける。
    Continue,
    /// この対局をやめる。
    EndMatch,
    /// すべてやめる。
    Exit,
}

/// 設定された対局数だけ遊ぶ。
///
/// 人間の席がある場合は、各対局の前に幅・深さを変更できる。
pub fn run<R: BufRead, W: Write>(
    options: &Options,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<Finish>, CliError> {
    let mut config = options.config();
    let mut finishes = Vec::new();

    for index in 0..options.games {
        if options.has_human() && !setup(&mut config, input, out)? {
            break;
        }

        info!(
            game = index,
            black = ?options.black,
            white = ?options.white,
            breadth = config.breadth(),
            depth = config.depth(),
            "match start"
        );
        let finish = play_match(options, config, input, out)?;
        finishes.push(finish);
        if finish == Finish::Exited {
            break;
        }
    }
    Ok(finishes)
}

/// 対局の合間に設定を受け付ける。対局を始めるなら `true`、終了するなら `false`。
fn setup<R: BufRead, W: Write>(
    config: &mut SearchConfig,
    input: &mut R,
    out: &mut W,
) -> Result<bool, CliError> {
    loop {
        writeln!(
            out,
            "AI breadth={} depth={}  [enter] start, b N breadth, d N depth, Q quit",
            config.breadth(),
            config.depth()
        )?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match Setup::parse(&line) {
            Some(Setup::Start) => return Ok(true),
            Some(Setup::Exit) => return Ok(false),
            Some(Setup::Breadth(breadth)) => *config = SearchConfig::new(breadth, config.depth()),
            Some(Setup::Depth(depth)) => *config = SearchConfig::new(config.breadth(), depth),
            None => writeln!(out, "unrecognized input")?,
        }
    }
}

/// 1局を最後まで（またはやめるまで）進める。
pub fn play_match<R: BufRead, W: Write>(
    options: &Options,
    config: SearchConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Finish, CliError> {
    let mut game = Game::new();

    loop {
        if let GameStatus::GameOver { black, white } = game.status() {
            write!(out, "{}", game.board())?;
            writeln!(out, "game over: X={black} O={white}")?;
            let outcome = game.status().outcome().unwrap_or(Outcome::Draw);
            info!(black, white, ?outcome, "match finished");
            return Ok(Finish::Completed(outcome));
        }

        let side = game.side_to_move();
        let turn = match options.seat(side) {
            Seat::Ai => {
                ai_turn(config, &mut game, out)?;
                Turn::Continue
            }
            Seat::Human => human_turn(options, &mut game, input, out)?,
        };

        match turn {
            Turn::Continue => {}
            Turn::EndMatch => {
                writeln!(out, "match abandoned")?;
                info!("match abandoned");
                return Ok(Finish::Abandoned);
            }
            Turn::Exit => {
                info!("exit requested");
                return Ok(Finish::Exited);
            }
        }
    }
}

/// AI の手番。
fn ai_turn<W: Write>(config: SearchConfig, game: &mut Game, out: &mut W) -> Result<(), CliError> {
    let side = game.side_to_move();
    let mv = ai::search::ai_move(game, config);
    match mv {
        Move::Place(chosen) => {
            writeln!(out, "{} plays {} (+{})", glyph(side), chosen.square, chosen.captured)?;
        }
        _ => writeln!(out, "{} passes", glyph(side))?,
    }

    if let Err(err) = game.play(mv.square()) {
        warn!(%err, "ai move rejected");
    }
    Ok(())
}

/// 人間の手番。盤面を表示し、合法な操作を1つ受け付ける。
fn human_turn<R: BufRead, W: Write>(
    options: &Options,
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> Result<Turn, CliError> {
    let side = game.side_to_move();
    if game.auto_pass_if_needed() {
        writeln!(out, "{} has no legal move and passes", glyph(side))?;
        return Ok(Turn::Continue);
    }

    write!(out, "{}", game.board())?;
    let score = game.score();
    writeln!(out, "X={} O={}  {} to move", score.black, score.white, glyph(side))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Turn::Exit);
        }

        let Some(command) = Command::parse(&line) else {
            writeln!(out, "unrecognized input, type ? for help")?;
            continue;
        };

        match command {
            Command::EndMatch => return Ok(Turn::EndMatch),
            Command::Exit => return Ok(Turn::Exit),
            Command::Help => {
                writeln!(
                    out,
                    "a1..h8 play, p pass, u undo, r redo, q end match, Q quit"
                )?;
            }
            Command::Pass => {
                if submit(game, None, out)? {
                    return Ok(Turn::Continue);
                }
            }
            Command::Play(square) => {
                if submit(game, Some(square), out)? {
                    return Ok(Turn::Continue);
                }
            }
            Command::Redo => {
                step_history(game, options.history_step(), Game::redo);
                return Ok(Turn::Continue);
            }
            Command::Undo => {
                step_history(game, options.history_step(), Game::undo);
                return Ok(Turn::Continue);
            }
        }
    }
}

/// 人間の手（`None` はパス）を適用する。入力し直すべきなら `false`。
fn submit<W: Write>(game: &mut Game, mv: Option<Square>, out: &mut W) -> Result<bool, CliError> {
    match game.play(mv) {
        Ok(_status) => Ok(true),
        Err(PlayError::IllegalMove) => {
            match mv {
                Some(square) => writeln!(out, "{square} is not a legal move")?,
                None => writeln!(out, "pass is not allowed here")?,
            }
            Ok(false)
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(true)
        }
    }
}

/// undo/redo を `steps` 回行う。
fn step_history(game: &mut Game, steps: u8, step: fn(&mut Game) -> bool) {
    for _ in 0..steps {
        if !step(game) {
            break;
        }
    }
}

/// 表示用の記号。
const fn glyph(color: Color) -> char {
    match color {
        Color::Black => 'X',
        _ => 'O',
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{Command, Finish, Setup, play_match, run, submit};
    use crate::options::{Options, Seat};
    use othello_core::ai::SearchConfig;
    use othello_core::ai::types::Ai as _;
    use othello_core::engine::{Game, Square};

    fn read_output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap_or_default()
    }

    #[test]
    fn commands_parse() {
        assert_eq!(Command::parse("d3\n"), Square::from_row_col(2, 3).map(Command::Play));
        assert_eq!(Command::parse(" H8 "), Square::from_row_col(7, 7).map(Command::Play));
        assert_eq!(Command::parse("u"), Some(Command::Undo));
        assert_eq!(Command::parse("redo"), Some(Command::Redo));
        assert_eq!(Command::parse("p"), Some(Command::Pass));
        assert_eq!(Command::parse("q"), Some(Command::EndMatch));
        assert_eq!(Command::parse("Q\n"), Some(Command::Exit));
        assert_eq!(Command::parse("i9"), None);
        assert_eq!(Command::parse("d0"), None);
        assert_eq!(Command::parse("d33"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn setup_commands_parse() {
        assert_eq!(Setup::parse("\n"), Some(Setup::Start));
        assert_eq!(Setup::parse("s"), Some(Setup::Start));
        assert_eq!(Setup::parse("b 3"), Some(Setup::Breadth(3)));
        assert_eq!(Setup::parse("depth 9\n"), Some(Setup::Depth(9)));
        assert_eq!(Setup::parse("Q"), Some(Setup::Exit));
        assert_eq!(Setup::parse("b"), None);
        assert_eq!(Setup::parse("b x"), None);
        assert_eq!(Setup::parse("d 1 2"), None);
    }

    #[test]
    fn ai_versus_ai_runs_to_completion() {
        let options = Options {
            black: Seat::Ai,
            breadth: 5,
            games: 2,
            white: Seat::Ai,
            ..Options::default()
        };
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();

        let finishes = run(&options, &mut input, &mut out).unwrap_or_default();
        assert_eq!(finishes.len(), 2);
        assert!(finishes.iter().all(|finish| matches!(finish, Finish::Completed(_))));
        assert!(read_output(out).contains("game over"));
    }

    #[test]
    fn human_can_play_undo_and_end_the_match() {
        let options = Options::default();
        let mut input = Cursor::new(b"z9\nc3\nd3\nu\nq\n".to_vec());
        let mut out = Vec::new();

        let finish = play_match(&options, options.config(), &mut input, &mut out);
        assert!(matches!(finish, Ok(Finish::Abandoned)));

        let text = read_output(out);
        assert!(text.contains("unrecognized input"));
        assert!(text.contains("c3 is not a legal move"));
        assert!(text.contains("O plays"));
        assert!(text.contains("match abandoned"));
        // undo で AI の手ごと戻り、黒番の初期局面が再表示される。
        assert_eq!(text.matches("X=2 O=2  X to move").count(), 2);
    }

    #[test]
    fn ending_a_match_moves_on_and_settings_change_between_matches() {
        let options = Options {
            games: 3,
            ..Options::default()
        };
        let mut input = Cursor::new(b"b 9\nd 2\n\nq\n\nQ\n".to_vec());
        let mut out = Vec::new();

        let finishes = run(&options, &mut input, &mut out).unwrap_or_default();
        assert_eq!(finishes, vec![Finish::Abandoned, Finish::Exited]);

        let text = read_output(out);
        assert!(text.contains("AI breadth=5 depth=0"));
        assert!(text.contains("AI breadth=5 depth=2"));
    }

    #[test]
    fn end_of_input_stops_the_session() {
        let options = Options::default();
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();

        let finishes = run(&options, &mut input, &mut out).unwrap_or_default();
        assert!(finishes.is_empty());

        let mut input = Cursor::new(b"\n".to_vec());
        let finishes = run(&options, &mut input, &mut Vec::new()).unwrap_or_default();
        assert_eq!(finishes, vec![Finish::Exited]);
    }

    #[test]
    fn submitting_after_the_game_ends_reports_the_error() {
        let mut game = Game::new();
        let mut agent = othello_core::ai::search::Agent::new(SearchConfig::new(5, 0));
        for _ in 0..200 {
            if game.is_game_over() {
                break;
            }
            let mv = agent.select_move(&game);
            if game.play(mv.square()).is_err() {
                break;
            }
        }
        assert!(game.is_game_over());

        let mut out = Vec::new();
        assert!(submit(&mut game, None, &mut out).unwrap_or(false));
        assert!(read_output(out).contains("the game is already over"));
    }
}
