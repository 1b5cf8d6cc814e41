use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    unicatalog::example_apps::run_search_demo(std::env::args().skip(1))
}
