use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use thing_printer::cli::{
    execute_divide, execute_echo, execute_print_thing, execute_sum, Cli, Commands,
};
use thing_printer::logging::init_logger;

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    match cli.command {
        // 出力先を持たない関数は標準出力へ直接書き込む
        Commands::PrintThing => execute_print_thing(),
        Commands::Echo { text } => execute_echo(&text),
        Commands::Sum { a, b } => execute_sum(&mut io::stdout().lock(), a, b, json)?,
        Commands::Divide { number, policy } => {
            execute_divide(&mut io::stdout().lock(), number, policy, json)?
        }
    }

    io::stdout().flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(error) = run(cli) {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
