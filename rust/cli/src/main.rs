use carddraw_cli::{logging, run};

fn main() {
    logging::init_logging();
    let code = run(std::env::args(), &mut std::io::stdout(), &mut std::io::stderr());
    std::process::exit(code);
}
