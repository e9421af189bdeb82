use devac_drv::ConfigOutcome;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match devac_drv::parse_args(&args) {
        Ok(ConfigOutcome::Help) => {
            print!("{}", devac_drv::USAGE);
        }
        Ok(ConfigOutcome::Run(config)) => match devac_drv::run(&config) {
            Ok(true) => std::process::exit(0),
            Ok(false) => std::process::exit(1),
            Err(err) => {
                eprintln!("devac: {err}");
                std::process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("devac: {err}");
            std::process::exit(1);
        }
    }
}
