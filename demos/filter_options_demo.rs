use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    unicatalog::example_apps::run_filter_options_demo(std::env::args().skip(1))
}
