// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("month")
            .long("month")
            .help("Calendar month YYYY-MM (default: current month)"),
    )
    .arg(Arg::new("from").long("from").help("First day, YYYY-MM-DD"))
    .arg(Arg::new("to").long("to").help("Last day, YYYY-MM-DD"))
}

fn type_arg(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .value_parser(["all", "income", "expense"])
            .default_value("all"),
    )
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
        .arg(
            Arg::new("jsonl")
                .long("jsonl")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

fn yes_arg() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Delete without asking for confirmation")
}

fn kind_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
        .required(required)
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .about("Track accounts, income and expenses against a finance API")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to config.toml"),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .value_parser(value_parser!(i64))
                .help("Telegram user id to act as"),
        )
        .subcommand(Command::new("init").about("Write a default config file"))
        .subcommand(json_args(type_arg(filter_args(
            Command::new("overview").about("Balance, totals and recent transactions"),
        ))))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .required(true)
                                .allow_hyphen_values(true),
                        ),
                )
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("rm")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(yes_arg()),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and edit transactions")
                .subcommand(
                    Command::new("add")
                        .arg(kind_arg(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .help("Account id (default: first account)"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_args(type_arg(filter_args(
                    Command::new("list").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .default_value("20"),
                    ),
                ))))
                .subcommand(
                    Command::new("rm")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(yes_arg()),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Built-in and custom categories")
                .subcommand(
                    Command::new("add")
                        .arg(kind_arg(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(json_args(Command::new("list").arg(kind_arg(false))))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(yes_arg()),
                ),
        )
        .subcommand(json_args(filter_args(
            Command::new("chart").about("Expenses by category"),
        )))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(type_arg(filter_args(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ))),
        )
        .subcommand(Command::new("doctor").about("Check the snapshot for dangling references"))
}
