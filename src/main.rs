use anyhow::Result;
use argh::FromArgs;
use assistant_bot::{Interpreter, records, salary, tree};
use log::debug;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Interactive contact assistant with a few small file utilities.
/// Without a subcommand, starts the interactive bot.
struct Args {
    #[argh(subcommand)]
    /// utility to run instead of the bot
    util: Option<Util>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Util {
    Salary(SalaryArgs),
    Records(RecordsArgs),
    Tree(TreeArgs),
}

#[derive(FromArgs)]
/// Sum and average the numbers found in a salary file.
#[argh(subcommand, name = "salary")]
struct SalaryArgs {
    #[argh(positional)]
    /// path to a text file with one entry per line
    path: PathBuf,
}

#[derive(FromArgs)]
/// Parse a comma-delimited record file (id,name,age per line).
#[argh(subcommand, name = "records")]
struct RecordsArgs {
    #[argh(positional)]
    /// path to the record file
    path: PathBuf,
}

#[derive(FromArgs)]
/// Display a directory tree.
#[argh(subcommand, name = "tree")]
struct TreeArgs {
    #[argh(positional)]
    /// directory to display
    path: PathBuf,

    #[argh(switch)]
    /// disable colored output
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Args = argh::from_env();

    match args.util {
        None => {
            debug!("starting interactive bot");
            Interpreter::new().repl()?;
        }
        Some(Util::Salary(sub)) => {
            let report = salary::total_salary(&sub.path)?;
            println!(
                "Total salary amount: {}$, Average salary: {}$",
                report.total, report.average
            );
        }
        Some(Util::Records(sub)) => {
            for record in records::read_records(&sub.path)? {
                println!("{}, {}, {}", record.id, record.name, record.age);
            }
        }
        Some(Util::Tree(sub)) => {
            tree::print_tree(&sub.path, !sub.no_color)?;
        }
    }
    Ok(())
}
