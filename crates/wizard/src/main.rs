use std::io;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod render;
mod session;

use session::Wizard;

fn main() {
    dotenv().ok();
    init_tracing();

    let wizard = Wizard::new(io::stdin().lock(), io::stdout().lock());
    match wizard.run() {
        Ok(discovery) => {
            let mut out = io::stdout().lock();
            if let Err(e) = render::print_discovery(&mut out, &discovery) {
                tracing::error!(?e, "Failed to print discovery output");
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::debug!(?e, "Wizard run aborted");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
