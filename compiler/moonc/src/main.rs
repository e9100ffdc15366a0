//! Moon CLI

use moonc::{init_tracing, Args};

fn main() {
    init_tracing();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            moonc::args::print_usage();
            std::process::exit(2);
        }
    };

    let status = moonc::commands::run(&args);
    std::process::exit(status.code());
}
