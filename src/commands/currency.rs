// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", _)) => {
            let ccy = store::get_currency(conn)?;
            println!("{} ({})", ccy.code, ccy.symbol);
        }
        Some(("set", sub)) => {
            let code = sub.get_one::<String>("code").unwrap().to_uppercase();
            let ccy = store::set_currency(conn, &code)?;
            println!("Currency set to {} ({})", ccy.code, ccy.symbol);
        }
        _ => {}
    }
    Ok(())
}
