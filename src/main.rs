use clap::Parser;
use codepage_d::compiler::{self, CodepageSet, Iconv};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codepage-d")]
#[command(version)]
#[command(about = "Compile legacy codepage to UTF-8 lookup tables", long_about = None)]
struct Cli {
    /// Codepage list to compile (defaults to the built-in list)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the generated module
    #[arg(short, long, default_value = "src/tables.rs")]
    out: PathBuf,

    /// List the configured codepages without compiling
    #[arg(short, long)]
    list: bool,

    /// Verify that the generated module is up to date instead of writing it
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let set = match &cli.config {
        Some(path) => CodepageSet::load_from_file(path)?,
        None => CodepageSet::load_default()?,
    };

    if cli.list {
        println!("Configured codepages:\n");
        for cp in &set.codepages {
            println!("  {:<12} {}", cp.name, cp.comment);
        }
        return Ok(());
    }

    let converter = Iconv::new();
    let tables = compiler::compile_all(&converter, &set)?;
    let rendered = compiler::render_tables_module(&tables);

    if cli.check {
        let current = fs::read_to_string(&cli.out)?;
        if current != rendered {
            return Err(format!(
                "{} is out of date, rerun without --check to regenerate it",
                cli.out.display()
            )
            .into());
        }
        println!("{} is up to date", cli.out.display());
        return Ok(());
    }

    fs::write(&cli.out, rendered)?;
    println!("Wrote {} tables to {}", tables.len(), cli.out.display());
    Ok(())
}
