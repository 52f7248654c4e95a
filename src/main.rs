use std::process;

use chrono::Local;
use clap::{CommandFactory, Parser};

use check_password_age::account::SystemAccounts;
use check_password_age::cli::{Cli, EXIT_SOFTWARE, EXIT_USAGE};
use check_password_age::passwd::PasswdCommand;
use check_password_age::{config_generator, logging, PasswordAgeCheck, Runner};

const ICINGA_COMMAND_NAME: &str = "password_age";

fn main() {
    if config_generator::generate_requested() {
        match config_generator::icinga_command(ICINGA_COMMAND_NAME, &Cli::command()) {
            Ok(out) => {
                println!("{}", out.trim());
                process::exit(0);
            }
            Err(err) => {
                eprintln!("failed to generate the Icinga command: {err}");
                process::exit(EXIT_SOFTWARE);
            }
        }
    }

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        // --help and --version end up here as well
        if err.use_stderr() {
            eprint!("{err}");
            process::exit(EXIT_USAGE);
        }
        print!("{err}");
        process::exit(0);
    });

    logging::init(cli.verbose);

    if let Some(advisory) = cli.thresholds().advisory() {
        eprintln!("{advisory}");
    }

    let params = cli.params();
    let check = PasswordAgeCheck::new(SystemAccounts, PasswdCommand::new(&cli.passwd_command));
    let today = Local::now().date_naive();

    Runner::new()
        .safe_run(|| check.run(&params, today))
        .print_and_exit()
}
