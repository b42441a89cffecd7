pub mod ident;
pub mod ir;
pub mod inference;
pub mod codegen;
pub mod decode;
pub mod generate;
pub mod cli;

fn main() {
    // Log to stderr so stdout stays a clean sink for generated code.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
