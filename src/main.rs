fn main() -> anyhow::Result<()> {
    civicly::cli::run()
}
