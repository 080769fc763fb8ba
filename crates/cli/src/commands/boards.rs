// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sprintlens boards` - list the Agile boards visible to the account.

use crate::config::Config;
use crate::error::Result;

use super::tracker_client;

pub async fn run(config: &Config) -> Result<()> {
    let client = tracker_client(config)?;
    let boards = client.boards().await?;

    if boards.is_empty() {
        println!("no boards visible to this account");
        return Ok(());
    }

    for board in boards {
        println!("{}\t{}\t{}", board.id, board.name, board.board_type);
    }
    Ok(())
}
