use clap::Parser;
use mp_cli::{
	cli::{Cli, Commands},
	client, logging, server,
};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let outcome = match cli.command {
		Commands::Serve(args) => server::run(args).await.map(|_| true),
		Commands::Call(args) => client::call(args).await,
	};

	match outcome {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			eprintln!("error: {err:#}");
			std::process::exit(1);
		}
	}
}
