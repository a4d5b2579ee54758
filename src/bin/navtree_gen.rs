fn main() -> anyhow::Result<()> {
    navtree::logging::init_logging()?;
    navtree::cli::run_cli()
}
