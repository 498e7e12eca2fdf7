fn main() -> anyhow::Result<()> {
    places_sync_lib::run()
}
