use clap::Parser;

mod args;
mod generate;
mod info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Generate(args) => generate::generate_command(args),
        args::Commands::Info(args) => info::info_command(args),
    }
}
