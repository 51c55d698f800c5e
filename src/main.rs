mod app;
mod browser;
mod data;
mod prompt;
mod stats;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    app::run()
}
