#[tokio::main]
async fn main() {
    if let Err(e) = acervo::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
