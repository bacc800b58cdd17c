//! 将棋ルールエンジンのテキストドライバ
//!
//! 標準入力から1行1コマンドを読み、`Session` に升目選択を渡して結果を出力する。

mod command;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use shogi_rules::rules::destinations;
use shogi_rules::types::json::BoardStateJson;
use shogi_rules::{Activation, Board, PromotionPolicy, Session, SessionConfig, Square};

use command::{Command, parse_line};

/// 将棋の升目選択セッションを標準入出力で操作する
#[derive(Parser, Debug)]
#[command(name = "shogi-cli", version, about)]
struct Cli {
    /// 初期盤面（SFEN の盤面部分、未指定時は平手）
    #[arg(long)]
    sfen: Option<String>,

    /// 手番を管理する（手番でない側の駒は選択できない）
    #[arg(long)]
    enforce_turns: bool,

    /// 成りの方針
    #[arg(long, default_value = "when-eligible", value_enum)]
    promotion: CliPromotionPolicy,

    /// 指し手が適用されるたびに盤面JSONを出力
    #[arg(long)]
    json: bool,
}

/// CLI用の成り方針（clap ValueEnum対応）
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliPromotionPolicy {
    WhenEligible,
    MandatoryOnly,
}

impl From<CliPromotionPolicy> for PromotionPolicy {
    fn from(cli: CliPromotionPolicy) -> Self {
        match cli {
            CliPromotionPolicy::WhenEligible => PromotionPolicy::WhenEligible,
            CliPromotionPolicy::MandatoryOnly => PromotionPolicy::MandatoryOnly,
        }
    }
}

impl Cli {
    /// CLIからSessionConfigを作成
    fn to_config(&self) -> SessionConfig {
        SessionConfig {
            enforce_turns: self.enforce_turns,
            promotion: self.promotion.into(),
        }
    }

    fn initial_board(&self) -> Result<Board> {
        match &self.sfen {
            Some(sfen) => {
                Board::from_sfen(sfen).with_context(|| format!("invalid --sfen '{sfen}'"))
            }
            None => Ok(Board::startpos()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let board = cli.initial_board()?;
    let mut session = Session::with_board(board, cli.to_config());
    info!(
        "starting session: {:?} board={}",
        session.config(),
        session.current_board().to_sfen()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                warn!("{err}");
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        handle_command(&mut session, command, cli.json, &mut out)?;
        out.flush()?;
    }

    Ok(())
}

fn handle_command(
    session: &mut Session,
    command: Command,
    json_after_move: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Activate { row, col } => match session.activate_square(row, col) {
            Ok(Activation::Selected(sq)) => writeln!(out, "selected {sq}")?,
            Ok(Activation::Deselected(sq)) => writeln!(out, "deselected {sq}")?,
            Ok(Activation::Ignored) => writeln!(out, "ignored")?,
            Ok(Activation::Moved(outcome)) => {
                let moved = outcome.moved.map(|pc| pc.to_sfen()).unwrap_or_default();
                match outcome.captured {
                    Some(pc) => writeln!(out, "moved {} {moved} captured {pc}", outcome.mv)?,
                    None => writeln!(out, "moved {} {moved}", outcome.mv)?,
                }
                if json_after_move {
                    writeln!(out, "{}", BoardStateJson::from_session(session).to_json()?)?;
                }
            }
            Err(err) => writeln!(out, "rejected: {err}")?,
        },
        Command::Moves { row, col } => match Square::from_coords(row, col) {
            Ok(from) => {
                let targets: Vec<String> = destinations(session.current_board(), from)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "moves {from}: {}", targets.join(" "))?;
            }
            Err(err) => writeln!(out, "rejected: {err}")?,
        },
        Command::Board => write!(out, "{}", session.current_board())?,
        Command::Json => writeln!(out, "{}", BoardStateJson::from_session(session).to_json()?)?,
        Command::Sfen => writeln!(out, "{}", session.current_board().to_sfen())?,
        Command::Reset => {
            session.reset();
            writeln!(out, "reset")?;
        }
        Command::Quit => {}
    }
    Ok(())
}
