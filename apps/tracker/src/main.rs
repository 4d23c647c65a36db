fn main() -> anyhow::Result<()> {
    vocab_tracker_lib::run()
}
