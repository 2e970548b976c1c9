use clap::Parser;
use steam_stats_gen::cli::Cli;

fn main() {
    let args = Cli::parse();
    steam_stats_gen::init_logging(args.verbose);

    if let Err(err) = steam_stats_gen::run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
