use clap::Parser;
use spendwise::{
    cli::{run, Cli},
    init,
};

#[tokio::main]
async fn main() {
    init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
