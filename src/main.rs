extern crate buffer_sim;

use std::env;
use std::process;

use buffer_sim::report::banner;
use buffer_sim::{logging, DefaultSimulation, Error, Result, Seed, SimConfig};

const USAGE: &str = "
Usage: buffer_sim [options]

Options:
    --seed <n>    Seed of the random stream [default: 42].
    --entropy     Seed from the operating system (the seed is logged).
    --help        Display this message.
";

fn parse_args(mut args: env::Args) -> Result<Option<SimConfig>> {
    let mut config = SimConfig::default();
    args.next();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" => return Ok(None),
            "--entropy" => config.seed = Seed::Entropy,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::InvalidArgument("--seed needs a value".to_owned()))?;
                let seed = value
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("bad seed {:?}", value)))?;
                config.seed = Seed::Fixed(seed);
            }
            other => return Err(Error::InvalidArgument(other.to_owned())),
        }
    }
    Ok(Some(config))
}

fn start() -> Result<()> {
    let config = match parse_args(env::args())? {
        Some(config) => config,
        None => {
            println!("{}", USAGE.trim());
            return Ok(());
        }
    };

    println!("{}", banner(&config));
    let mut sim = DefaultSimulation::from_config(&config)?;
    sim.run(config.limits);
    println!();
    println!("{}", sim.report());
    Ok(())
}

fn main() {
    logging::init();
    if let Err(error) = start() {
        eprintln!("Error: {}.", error);
        process::exit(1);
    }
}
