// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendclip")
        .version(crate_version!())
        .about("Single-user expense tracking with monthly category reports")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("expense")
                .about("Record and browse expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Only expenses in this month (YYYY-MM)"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Only expenses with this category id"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Replace an expense (all fields required)")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense (irreversible)")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("report").about("Monthly reports").subcommand(json_flags(
                Command::new("month")
                    .about("Category breakdown and dominant category for one month")
                    .arg(
                        Arg::new("month")
                            .long("month")
                            .help("YYYY-MM, defaults to the current month"),
                    ),
            )),
        )
        .subcommand(
            Command::new("currency")
                .about("Currency preference")
                .subcommand(Command::new("get").about("Show the active currency"))
                .subcommand(
                    Command::new("set")
                        .about("Set the active currency")
                        .arg(Arg::new("code").required(true).help("USD or INR")),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Expense categories")
                .subcommand(Command::new("list").about("List the category catalog")),
        )
        .subcommand(
            Command::new("export").about("Export data to a file").subcommand(
                Command::new("expenses")
                    .about("Export all expenses")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for issues"))
}
