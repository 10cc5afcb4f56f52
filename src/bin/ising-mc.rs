use std::io::Write;
use std::path::PathBuf;

use auto_args::AutoArgs;

use isingmc::ising::IsingParams;
use isingmc::mc::metropolis::{MCParams, MC};

/// One fixed-temperature Metropolis run over one Ising lattice.
#[derive(Debug, AutoArgs)]
struct Flags {
    /// lattice input
    _ising: IsingParams,
    /// simulation input
    _mc: MCParams,
    /// Also append the summary line to this file
    output: Option<PathBuf>,
    /// Print the summary as yaml rather than as one line of numbers
    yaml: bool,
}

fn main() {
    eprintln!("git version: {}", isingmc::VERSION);
    let flags = Flags::from_args();
    let mut mc = match MC::from_params(flags._mc, flags._ising) {
        Ok(mc) => mc,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let observables = mc.run();
    if flags.yaml {
        print!(
            "{}",
            serde_yaml::to_string(&observables).expect("error formatting yaml?!")
        );
    } else {
        println!("{}", observables);
    }
    if let Some(ref output) = flags.output {
        let mut f = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(output)
            .expect(&format!("error opening file {:?}", output));
        writeln!(f, "{}", observables).expect("error appending summary?!");
    }
}
