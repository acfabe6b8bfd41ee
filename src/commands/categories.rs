// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::CATEGORIES;
use crate::utils::pretty_table;
use anyhow::Result;

// The catalog is closed: list only, no add/rm.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let rows: Vec<Vec<String>> = CATEGORIES
            .iter()
            .map(|c| vec![c.id.to_string(), c.label.to_string(), c.color.to_string()])
            .collect();
        println!("{}", pretty_table(&["Id", "Label", "Color"], rows));
    }
    Ok(())
}
