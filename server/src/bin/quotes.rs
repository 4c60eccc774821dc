use server::{config::Config, quotes, serve};
use store::Repository;

#[tokio::main]
async fn main() {
    server::init_tracing();

    let config = Config::load(quotes::DEFAULT_PORT);
    let repo = Repository::open(config.data_file(quotes::DATA_FILE));

    serve(quotes::app(repo), config.port).await;
}
