//! 標準入力のコマンド解析

/// 1行分のコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<row> <col>`: 升目を押す
    Activate { row: i32, col: i32 },
    /// `moves <row> <col>`: 駒の移動可能な升目を表示
    Moves { row: i32, col: i32 },
    Board,
    Json,
    Sfen,
    Reset,
    Quit,
}

/// 1行を解析する（空行・`#` で始まる行は None）
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = match tokens.as_slice() {
        ["board"] => Command::Board,
        ["json"] => Command::Json,
        ["sfen"] => Command::Sfen,
        ["reset"] => Command::Reset,
        ["quit"] | ["exit"] => Command::Quit,
        ["moves", row, col] => {
            let (row, col) = parse_coords(row, col)?;
            Command::Moves { row, col }
        }
        [row, col] => {
            let (row, col) = parse_coords(row, col)?;
            Command::Activate { row, col }
        }
        _ => return Err(format!("unknown command: {line}")),
    };
    Ok(Some(command))
}

fn parse_coords(row: &str, col: &str) -> Result<(i32, i32), String> {
    let row = row.parse().map_err(|_| format!("invalid row: {row}"))?;
    let col = col.parse().map_err(|_| format!("invalid column: {col}"))?;
    Ok((row, col))
}
