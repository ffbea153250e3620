use std::io;

fn main() {
    roshambo_cli::logging::init_logging();
    let code = roshambo_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
