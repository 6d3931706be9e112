#[deny(clippy::unwrap_used)]
mod checks;
mod commands;
mod config;
mod display;
mod store;

use std::error::Error;

use clap::*;
use commands::{Add, Destroy, Init, Remove, Show};

#[derive(Parser)]
#[command(name = "qualidator", bin_name = "qualidator", version)]
enum Command {
    Init(Init),
    Destroy(Destroy),
    Add(Add),
    Remove(Remove),
    Show(Show),
}

fn main() -> Result<(), Box<dyn Error>> {
    let command = Command::parse();
    match command {
        Command::Init(args) => args.run(),
        Command::Destroy(args) => args.run(),
        Command::Add(args) => args.run(),
        Command::Remove(args) => args.run(),
        Command::Show(args) => args.run(),
    }
}
