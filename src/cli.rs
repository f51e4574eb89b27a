// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print machine-readable JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON Lines (one object per line)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pesowise")
        .about("Personal income/expense tracking, monthly budgets, savings goals, and reports")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("config")
                .about("Hosted store connection settings")
                .subcommand(
                    Command::new("set")
                        .about("Set one or more connection fields")
                        .arg(Arg::new("service-url").long("service-url").value_name("URL"))
                        .arg(Arg::new("api-key").long("api-key").value_name("KEY"))
                        .arg(Arg::new("user-id").long("user-id").value_name("ID")),
                )
                .subcommand(Command::new("show").about("Show the current settings"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
        .subcommand(Command::new("doctor").about("Check config and store reachability"))
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Balance, budget burn-down, weekly spending, recent activity")
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .value_name("SECS")
                        .value_parser(value_parser!(u64))
                        .help("Re-fetch and re-render every SECS seconds"),
                ),
        ))
        .subcommand(
            Command::new("income")
                .about("Income records")
                .subcommand(
                    Command::new("add")
                        .about("Record income")
                        .arg(Arg::new("title").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Salary")
                                .help("Salary, Business, Freelance, Gift or Others"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List income, optionally with a trend series")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("trend")
                                .long("trend")
                                .value_parser(["weekly", "monthly", "yearly"])
                                .help("Bucketed income vs expense series"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete an income record")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Expense records")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense (runs balance and budget pre-checks)")
                        .arg(Arg::new("title").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Food")
                                .help("Food, Transport, Bills, Shopping or Etc."),
                        )
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .action(ArgAction::SetTrue)
                                .help("Confirm going over the category's monthly budget"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("today")
                                .long("today")
                                .action(ArgAction::SetTrue)
                                .help("Only today's expenses"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense record")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly category limits")
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly limit for a category")
                        .arg(Arg::new("category").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("end-date")
                                .long("end-date")
                                .value_name("YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List budgets")))
                .subcommand(json_flags(
                    Command::new("status").about("Utilization of each budget this month"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a budget")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("title").required(true))
                        .arg(
                            Arg::new("progress")
                                .long("progress")
                                .value_parser(value_parser!(i64))
                                .default_value("0")
                                .help("Progress percent, 0-100"),
                        )
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .value_name("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("category").long("category").default_value("Etc.")),
                )
                .subcommand(json_flags(Command::new("list").about("List goals")))
                .subcommand(
                    Command::new("progress")
                        .about("Update a goal's progress percent")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("percent")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a goal")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived reports over the full ledger")
                .subcommand(json_flags(
                    Command::new("summary").about("Totals, savings rate, record counts"),
                ))
                .subcommand(json_flags(
                    Command::new("monthly").about("Income vs expenses per month, Jan..Dec"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Spending by category with shares"),
                ))
                .subcommand(json_flags(
                    Command::new("budgets").about("Budget tracker: limits vs actual spend"),
                )),
        )
}
