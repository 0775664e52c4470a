//! torus-life: headless particle-life runner.
//!
//! Usage:
//!   torus-life --per-type 50 --ticks 1000 --seed 42 > final.json
//!   torus-life --config world.json --width 800 --height 600

use std::process;

use torus_life_app::cli::{self, Command};
use torus_life_app::driver;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };

    let report = match driver::run(&options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report.snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing snapshot: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "torus-life: particle-life simulation on a wrap-around surface\n\
         \n\
         Runs headless and prints the final world snapshot as JSON on stdout.\n\
         \n\
           --config <path>       JSON world config (particle_size, attraction_mods)\n\
           --width <f64>         Surface width (default: 600)\n\
           --height <f64>        Surface height (default: 400)\n\
           --per-type <N>        Particles per type (default: 50)\n\
           --ticks <N>           Ticks to simulate (default: 1000)\n\
           --seed <N>            RNG seed for placement (default: 42)\n\
           --report-every <N>    Progress line every N ticks, 0 = never (default: 100)\n\
           --help                Show this message\n"
    );
}
