use check_nfs_client::{app, cli::Cli, logging};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    std::process::exit(app::run(&cli));
}
