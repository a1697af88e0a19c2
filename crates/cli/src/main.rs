use partial_infra::Config;

fn main() -> anyhow::Result<()> {
    partial_observability::init();

    let config = Config::load();
    let mut out = std::io::stdout().lock();
    partial_cli::run(&config, &mut out)
}
