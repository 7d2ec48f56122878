#[tokio::main]
async fn main() -> anyhow::Result<()> {
    word_drill::run().await
}
