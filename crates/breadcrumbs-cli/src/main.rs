use std::process;

fn main() {
    match breadcrumbs_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("breadcrumbs error: {err:#}");
            process::exit(1);
        }
    }
}
