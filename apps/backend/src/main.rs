#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quizmd_backend::run().await
}
